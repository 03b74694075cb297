use dioxus::prelude::*;
use shared_types::{Breadcrumb, Event};

use super::filter::FilterDropdown;
use super::pipeline::{
    collapse_breadcrumbs, derive_filter_options, filter_by_options, filter_by_search_term,
    load_breadcrumbs,
};
use super::styles::BREADCRUMBS_STYLES;
use super::types::{BreadcrumbWithDetails, FilterAction, ListState, NO_MATCHING_CRUMBS_TEXT};

// ── Formatting helpers ───────────────────────────────────────────────────────

/// `HH:MM:SS` for RFC 3339 timestamps, anything else verbatim
pub fn format_crumb_time(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Message when present, otherwise the data as `key: value` pairs
pub fn describe_crumb(crumb: &Breadcrumb) -> String {
    if let Some(message) = crumb.message.as_deref().filter(|m| !m.trim().is_empty()) {
        return message.to_string();
    }

    match crumb.data.as_ref() {
        Some(serde_json::Value::Object(map)) => map
            .iter()
            .map(|(key, value)| format!("{key}: {}", compact_value(value)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => compact_value(other),
    }
}

fn compact_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ── Container ────────────────────────────────────────────────────────────────

/// Breadcrumb timeline of an event, ending with the error itself
#[component]
pub fn BreadcrumbsSection(event: Event, breadcrumbs: Vec<Breadcrumb>) -> Element {
    let all = use_signal(|| load_breadcrumbs(&event, &breadcrumbs));
    let filter_options = use_signal(|| derive_filter_options(&all.read()));
    let mut list_state = use_signal(ListState::default);

    let filtered_by_filter = use_memo(move || filter_by_options(&all.read(), &filter_options.read()));
    let filtered_by_search = use_memo(move || {
        filter_by_search_term(&filtered_by_filter.read(), &list_state.read().search_term)
    });
    let view = use_memo(move || {
        collapse_breadcrumbs(&filtered_by_search.read(), list_state.read().is_collapsed)
    });

    let on_filter = move |action: FilterAction| {
        dioxus_logger::tracing::debug!("Breadcrumb filter action not applied: {:?}", action);
    };
    let view = view();
    let state = list_state();

    rsx! {
        style { {BREADCRUMBS_STYLES} }
        section {
            class: "event-section breadcrumbs-section",
            div {
                class: "event-section-header",
                h3 { "Breadcrumbs" }
                div {
                    class: "breadcrumbs-search",
                    FilterDropdown { options: filter_options(), on_filter }
                    input {
                        class: "breadcrumbs-search-input",
                        r#type: "text",
                        placeholder: "Search breadcrumbs…",
                        value: "{state.search_term}",
                        oninput: move |evt| {
                            let input = evt.value();
                            dioxus_logger::tracing::debug!("Breadcrumb search term: {input}");
                            list_state.write().search(&input);
                        },
                    }
                    if state.is_searching() {
                        button {
                            class: "breadcrumbs-search-clear",
                            title: "Clear search",
                            onclick: move |_| list_state.write().clear_search(),
                            "×"
                        }
                    }
                }
            }
            div {
                class: "breadcrumbs-content",
                if view.is_empty() {
                    div {
                        class: "empty-state",
                        div { class: "empty-icon", "⚠" }
                        p { {NO_MATCHING_CRUMBS_TEXT} }
                        button {
                            class: "breadcrumbs-reset-filter",
                            onclick: move |_| {
                                dioxus_logger::tracing::debug!("Breadcrumb filter reset not applied");
                            },
                            "Reset Filter"
                        }
                    }
                } else {
                    BreadcrumbsListHeader {}
                    BreadcrumbsListBody {
                        breadcrumbs: view.breadcrumbs.clone(),
                        collapsed_quantity: view.collapsed_quantity,
                        on_toggle_collapse: move |_| list_state.write().toggle_collapse(),
                    }
                }
            }
        }
    }
}

// ── List ─────────────────────────────────────────────────────────────────────

#[component]
fn BreadcrumbsListHeader() -> Element {
    rsx! {
        div {
            class: "breadcrumbs-row breadcrumbs-list-header",
            div { "Type" }
            div { "Category" }
            div { "Description" }
            div { "Level" }
            div { "Time" }
        }
    }
}

#[component]
fn BreadcrumbsListBody(
    breadcrumbs: Vec<BreadcrumbWithDetails>,
    collapsed_quantity: usize,
    on_toggle_collapse: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "breadcrumbs-list-body",
            if collapsed_quantity > 0 {
                button {
                    class: "breadcrumbs-collapsed",
                    onclick: move |_| on_toggle_collapse.call(()),
                    if collapsed_quantity == 1 {
                        "Show 1 collapsed crumb"
                    } else {
                        "Show {collapsed_quantity} collapsed crumbs"
                    }
                }
            }
            for breadcrumb in breadcrumbs {
                BreadcrumbRow { key: "{breadcrumb.id}", breadcrumb }
            }
        }
    }
}

#[component]
fn BreadcrumbRow(breadcrumb: BreadcrumbWithDetails) -> Element {
    let details = breadcrumb.details;
    let category = breadcrumb.crumb.category.clone().unwrap_or_default();
    let description = describe_crumb(&breadcrumb.crumb);
    let level = breadcrumb
        .crumb
        .level
        .as_ref()
        .map(|level| level.as_str().to_string())
        .unwrap_or_default();
    let time = breadcrumb
        .crumb
        .timestamp
        .as_deref()
        .map(format_crumb_time)
        .unwrap_or_default();

    rsx! {
        div {
            class: if breadcrumb.is_virtual {
                "breadcrumbs-row breadcrumb virtual"
            } else {
                "breadcrumbs-row breadcrumb"
            },
            div {
                class: "breadcrumb-type",
                span {
                    class: "breadcrumb-icon",
                    style: "color: {details.color}; border-color: {details.color};",
                    "{details.icon}"
                }
                span { "{details.description}" }
            }
            div { class: "breadcrumb-category", "{category}" }
            div { class: "breadcrumb-description", "{description}" }
            div { class: "breadcrumb-level level-{level}", "{level}" }
            div { class: "breadcrumb-time", "{time}" }
        }
    }
}
