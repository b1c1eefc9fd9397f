use dioxus::prelude::*;

use crate::domain::{format_currency, price_with_vat, Restriction, Skip, SkipId};
use crate::util::assets;

#[component]
pub fn SkipCard(
    skip: Skip,
    selected: bool,
    show_best_value: bool,
    on_select: EventHandler<SkipId>,
) -> Element {
    let id = skip.id;
    let disabled = skip.is_disabled();
    let label = skip.label();
    let hire_period = format!("{} day hire period", skip.hire_period_days);
    let price = price_with_vat(&skip)
        .map(|gross| format_currency(gross as f64))
        .unwrap_or_else(|_| "Price on request".to_string());
    let best_value = show_best_value && skip.is_best_value();
    let notes: Vec<&'static str> = skip.restrictions().iter().map(Restriction::label).collect();

    let class = match (selected, disabled) {
        (true, _) => "skip-card skip-card--selected",
        (false, true) => "skip-card skip-card--disabled",
        (false, false) => "skip-card",
    };
    let role = if disabled { "presentation" } else { "button" };
    let button_class = if selected {
        "skip-card__button skip-card__button--selected"
    } else {
        "skip-card__button"
    };

    rsx! {
        div {
            class: "{class}",
            role: "{role}",
            "aria-pressed": "{selected}",
            "aria-disabled": "{disabled}",
            onclick: move |_| {
                if !disabled {
                    on_select.call(id);
                }
            },
            if selected {
                div { class: "skip-card__check", "✓" }
            }
            div { class: "skip-card__media",
                img { src: assets::skip_image_data_uri(), alt: "{label}" }
                div { class: "skip-card__notes",
                    for note in notes {
                        span { class: "skip-card__note", "⚠ {note}" }
                    }
                }
            }
            h3 { class: "skip-card__title", "{label}" }
            p { class: "skip-card__subtitle", "{hire_period}" }
            div { class: "skip-card__price-row",
                div {
                    span { class: "skip-card__price", "{price}" }
                    span { class: "skip-card__per", " per week" }
                }
                if best_value {
                    span { class: "badge badge--best", "Best value" }
                }
            }
            button {
                class: "{button_class}",
                disabled: disabled,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    if !disabled {
                        on_select.call(id);
                    }
                },
                if selected { "Selected" } else { "Select This Skip →" }
            }
        }
    }
}
