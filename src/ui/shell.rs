use dioxus::prelude::*;

use crate::domain::Location;
use crate::util::version::{APP_NAME, APP_VERSION};

#[component]
pub fn Shell(location: Location, children: Element) -> Element {
    let area = if location.area.is_empty() {
        location.postcode.clone()
    } else {
        format!("{} · {}", location.postcode, location.area)
    };

    rsx! {
        div { class: "shell",
            header { class: "shell__header",
                div { class: "shell__brand",
                    h1 { class: "shell__title", "{APP_NAME}" }
                    span { class: "shell__version", "v{APP_VERSION}" }
                }
                span { class: "shell__location", "📍 {area}" }
            }
            main { class: "shell__main",
                {children}
            }
        }
    }
}
