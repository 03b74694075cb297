use dioxus::prelude::*;

use super::types::{FilterAction, FilterOptionItem, FilterOptions};

pub fn active_filter_label(checked_quantity: usize) -> String {
    match checked_quantity {
        0 => "Filter By".to_string(),
        1 => "1 Active Filter".to_string(),
        n => format!("{n} Active Filters"),
    }
}

/// Dropdown with the "Type" and "Level" checkbox groups
#[component]
pub fn FilterDropdown(options: FilterOptions, on_filter: EventHandler<FilterAction>) -> Element {
    let mut is_open = use_signal(|| false);

    if options.is_empty() {
        return rsx! {};
    }

    let checked_quantity = options.checked_count();
    let button_label = active_filter_label(checked_quantity);
    let type_items = options.type_items();
    let level_items = options.level_items();

    rsx! {
        div {
            class: "breadcrumbs-filter",
            button {
                class: if checked_quantity > 0 {
                    "breadcrumbs-filter-button primary"
                } else {
                    "breadcrumbs-filter-button"
                },
                onclick: move |_| is_open.set(!is_open()),
                "{button_label}"
            }
            if is_open() {
                div {
                    class: "breadcrumbs-filter-menu",
                    div {
                        class: "breadcrumbs-filter-menu-header",
                        span { "{checked_quantity} checked" }
                        button {
                            class: "breadcrumbs-filter-check-all",
                            onclick: move |_| on_filter.call(FilterAction::CheckAll),
                            "Check All"
                        }
                    }
                    if !type_items.is_empty() {
                        OptionsGroup { title: "Type".to_string(), items: type_items, on_filter }
                    }
                    if !level_items.is_empty() {
                        OptionsGroup { title: "Level".to_string(), items: level_items, on_filter }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionsGroup(
    title: String,
    items: Vec<FilterOptionItem>,
    on_filter: EventHandler<FilterAction>,
) -> Element {
    rsx! {
        div {
            div { class: "breadcrumbs-filter-group-title", "{title}" }
            ul {
                class: "breadcrumbs-filter-list",
                for item in items {
                    li {
                        key: "{item.group.key()}",
                        class: if item.is_checked {
                            "breadcrumbs-filter-item checked"
                        } else {
                            "breadcrumbs-filter-item"
                        },
                        onclick: {
                            let group = item.group.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_filter.call(FilterAction::Toggle(group.clone()));
                            }
                        },
                        span {
                            class: "breadcrumb-icon",
                            style: "color: {item.color};",
                            "{item.icon}"
                        }
                        span { class: "breadcrumbs-filter-item-label", "{item.label}" }
                        input {
                            r#type: "checkbox",
                            checked: item.is_checked,
                            readonly: true,
                        }
                    }
                }
            }
        }
    }
}
