use dioxus::prelude::*;

use crate::domain::{format_currency, price_with_vat, Skip};

/// Sticky footer summarising the current selection with Back / Continue actions.
#[component]
pub fn SelectionFooter(
    #[props(!optional)] selected: Option<Skip>,
    on_back: EventHandler<()>,
    on_continue: EventHandler<()>,
) -> Element {
    let mut expanded = use_signal(|| false);

    let Some(skip) = selected else {
        return rsx! {
            footer { class: "footer",
                p { class: "footer__hint", "Select a skip to continue" }
                div { class: "footer__actions",
                    button { class: "btn btn--ghost", onclick: move |_| on_back.call(()), "Back" }
                    button { class: "btn btn--primary", disabled: true, "Continue →" }
                }
            }
        };
    };

    let label = skip.label();
    let hire_period = format!("{} day hire period", skip.hire_period_days);
    let total = price_with_vat(&skip)
        .map(|gross| format_currency(gross as f64))
        .unwrap_or_else(|_| "Price on request".to_string());
    let details = vec![
        ("Skip Size", format!("{} Yards", skip.size)),
        ("Hire Period", format!("{} Days", skip.hire_period_days)),
        ("Price before VAT", format_currency(skip.price_before_vat)),
        ("VAT", format!("{}%", skip.vat)),
        ("Total", total.clone()),
        (
            "Road Placement",
            if skip.allowed_on_road { "Allowed" } else { "Private property only" }.to_string(),
        ),
        (
            "Heavy Waste",
            if skip.allows_heavy_waste { "Allowed" } else { "Not allowed" }.to_string(),
        ),
    ];

    rsx! {
        footer { class: "footer footer--selected",
            if expanded() {
                dl { class: "footer__details",
                    for (term, value) in details {
                        div { class: "footer__detail",
                            dt { "{term}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
            div { class: "footer__summary",
                button {
                    class: "footer__expand",
                    title: "Show details",
                    onclick: move |_| {
                        let open = expanded();
                        expanded.set(!open);
                    },
                    if expanded() { "▾" } else { "▴" }
                }
                div {
                    p { class: "footer__label", "{label}" }
                    p { class: "footer__sub", "{hire_period}" }
                }
                span { class: "footer__price", "{total}" }
            }
            div { class: "footer__actions",
                button { class: "btn btn--ghost", onclick: move |_| on_back.call(()), "Back" }
                button { class: "btn btn--primary", onclick: move |_| on_continue.call(()), "Continue →" }
            }
        }
    }
}
