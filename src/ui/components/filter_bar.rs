use dioxus::prelude::*;

use crate::domain::{SkipCategory, SkipFilter};

#[component]
pub fn FilterBar(
    filter: Signal<SkipFilter>,
    filters_open: Signal<bool>,
    enable_filters: bool,
) -> Element {
    let mut filter = filter;
    let mut filters_open = filters_open;

    let (search, active) = filter.with(|f| (f.search.clone(), f.category));
    let open = enable_filters && filters_open();
    let toggle_class = if filters_open() {
        "filter-bar__toggle filter-bar__toggle--open"
    } else {
        "filter-bar__toggle"
    };

    let chips: Vec<(SkipCategory, &'static str, &'static str, &'static str)> = SkipCategory::ALL
        .iter()
        .map(|category| {
            let class = if active == Some(*category) {
                "chip chip--active"
            } else {
                "chip"
            };
            (*category, category.key(), category.label(), class)
        })
        .collect();

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-bar__row",
                div { class: "search",
                    span { class: "search__icon", "🔍" }
                    input {
                        class: "search__input",
                        r#type: "text",
                        value: "{search}",
                        placeholder: "Search by skip size...",
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            filter.with_mut(|f| f.search = value);
                        },
                    }
                    if !search.is_empty() {
                        button {
                            class: "search__clear",
                            title: "Clear search",
                            onclick: move |_| filter.with_mut(|f| f.search.clear()),
                            "✕"
                        }
                    }
                }
                if enable_filters {
                    button {
                        class: "{toggle_class}",
                        title: "Filters",
                        onclick: move |_| {
                            let was_open = filters_open();
                            filters_open.set(!was_open);
                        },
                        "⚙ Filters"
                    }
                }
            }
            if open {
                div { class: "filter-bar__chips",
                    for (category, key, label, class) in chips {
                        button {
                            key: "{key}",
                            class: "{class}",
                            "data-filter": "{key}",
                            onclick: move |_| filter.with_mut(|f| f.toggle_category(category)),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
