use dioxus::prelude::*;
use tracing::{error, info};

use crate::{
    domain::{price_with_vat, FetchOutcome, Location, SkipState},
    infra::{load_skips, SkipClient},
    ui::{
        components::{
            selection_footer::SelectionFooter,
            status::{ErrorState, LoadingState},
        },
        pages::SkipSelectionPage,
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let state = use_signal(SkipState::default);
    use_context_provider(|| state);

    // Bumped by "Try Again" to re-run the fetch from scratch.
    let reload = use_signal(|| 0_u32);

    let client = use_hook({
        let config = config.clone();
        move || SkipClient::new(&config).map_err(|err| err.to_string())
    });

    let _skips = use_resource({
        let location = config.location.clone();
        move || {
            let attempt = reload();
            let client = client.clone();
            let location = location.clone();
            async move { fetch_skips(state, client, location, attempt).await }
        }
    });

    let (loading, error, selected) =
        state.with(|st| (st.loading, st.error.clone(), st.selected.clone()));

    let body = if loading {
        rsx! { LoadingState {} }
    } else if let Some(message) = error {
        rsx! {
            ErrorState { message, on_retry: move |_| retry(state, reload) }
        }
    } else {
        rsx! { SkipSelectionPage {} }
    };

    rsx! {
        document::Style { "{assets::main_css()}" }
        Shell { location: config.location.clone(),
            {body}
        }
        SelectionFooter {
            selected,
            on_back: move |_| info!("back to waste type step"),
            on_continue: move |_| continue_with_selection(state),
        }
    }
}

async fn fetch_skips(
    mut state: Signal<SkipState>,
    client: Result<SkipClient, String>,
    location: Location,
    attempt: u32,
) -> FetchOutcome {
    let ticket = state.with_mut(|st| st.begin_request());
    info!(
        postcode = %location.postcode,
        area = %location.area,
        attempt,
        generation = ticket.generation(),
        "loading skips"
    );

    let result = match client {
        Ok(client) => load_skips(&client, &location)
            .await
            .map_err(|err| err.to_string()),
        Err(err) => Err(format!("Failed to initialise skip client: {err}")),
    };
    if let Err(err) = &result {
        error!(%err, "failed to load skips");
    }

    state.with_mut(|st| st.complete(ticket, result))
}

fn retry(mut state: Signal<SkipState>, mut reload: Signal<u32>) {
    state.with_mut(|st| st.reset());
    *reload.write() += 1;
}

fn continue_with_selection(state: Signal<SkipState>) {
    let Some(skip) = state.with(|st| st.selected.clone()) else {
        return;
    };
    match price_with_vat(&skip) {
        Ok(price) => info!(skip_id = skip.id, size = skip.size, price, "continuing with skip"),
        Err(err) => error!(skip_id = skip.id, %err, "selected skip has an invalid price"),
    }
}
