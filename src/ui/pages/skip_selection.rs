use dioxus::prelude::*;

use crate::{
    domain::{SkipFilter, SkipId, SkipState},
    ui::components::{filter_bar::FilterBar, skip_card::SkipCard},
    util::config::AppConfig,
};

#[component]
pub fn SkipSelectionPage() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context::<Signal<SkipState>>();

    let mut filter = use_signal(SkipFilter::default);
    let filters_open = use_signal(|| false);

    let show_best_value = config.features.show_best_value;
    let cards = state.with(|st| {
        filter
            .read()
            .apply(&st.skips)
            .into_iter()
            .map(|skip| {
                let selected = st.is_selected(skip.id);
                (skip.id, skip, selected)
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "page",
            div { class: "page__intro",
                h2 { class: "page__title", "Select Your Skip" }
                p { class: "page__subtitle", "Choose the right skip for your waste disposal needs" }
            }
            FilterBar {
                filter,
                filters_open,
                enable_filters: config.features.enable_filters,
            }
            if cards.is_empty() {
                div { class: "empty",
                    div { class: "empty__icon", "🔍" }
                    h3 { class: "empty__title", "No skips found" }
                    p { class: "empty__text",
                        "Try adjusting your search or filters to find what you're looking for."
                    }
                    button {
                        class: "btn btn--ghost",
                        onclick: move |_| filter.with_mut(SkipFilter::clear),
                        "Clear all filters"
                    }
                }
            } else {
                div { class: "grid",
                    for (id, skip, selected) in cards {
                        SkipCard {
                            key: "{id}",
                            skip,
                            selected,
                            show_best_value,
                            on_select: move |id: SkipId| select_skip(state, id),
                        }
                    }
                }
            }
        }
    }
}

fn select_skip(mut state: Signal<SkipState>, id: SkipId) {
    state.with_mut(|st| {
        if let Some(skip) = st.skips.iter().find(|skip| skip.id == id).cloned() {
            st.select(&skip);
        }
    });
}
