use dioxus::prelude::*;

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        div { class: "status",
            div { class: "status__spinner" }
            p { class: "status__text", "Loading skip options..." }
        }
    }
}

#[component]
pub fn ErrorState(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "status status--error",
            h3 { class: "status__title", "Error Loading Data" }
            p { class: "status__text", "{message}" }
            button { class: "btn btn--primary", onclick: move |_| on_retry.call(()), "Try Again" }
        }
    }
}
