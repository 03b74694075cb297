use dioxus::prelude::*;
use shared_types::{GroupComponent, GroupComponentValue, GroupVariant};

use crate::components::key_value::{KeyValueList, KeyValueRow};

use super::logic::{
    has_non_contributing_component, sort_variants, variant_component, variant_rows,
    variant_title, visible_values, VariantRowValue,
};
use super::styles::GROUPING_STYLES;

/// All grouping variants of an event, contributing ones first
#[component]
pub fn GroupingInfo(variants: Vec<GroupVariant>) -> Element {
    let variants = sort_variants(variants);

    rsx! {
        style { {GROUPING_STYLES} }
        section {
            class: "event-section grouping-info",
            div {
                class: "event-section-header",
                h3 { "Event Grouping Information" }
            }
            if variants.is_empty() {
                div { class: "empty-state", p { "No grouping information available" } }
            }
            for (idx, variant) in variants.into_iter().enumerate() {
                GroupVariantView { key: "{idx}", variant }
            }
        }
    }
}

#[component]
pub fn GroupVariantView(variant: GroupVariant) -> Element {
    let mut show_non_contributing = use_signal(|| false);

    let rows = variant_rows(&variant);
    let title = variant_title(&variant);
    let offer_toggle = has_non_contributing_component(variant_component(&variant));
    let show_all = show_non_contributing();

    rsx! {
        div {
            class: "grouping-variant",
            div {
                class: "grouping-variant-header",
                h5 {
                    class: "grouping-variant-title",
                    title: "{title.tooltip}",
                    if title.is_contributing {
                        span { class: "contribution-icon contributing", "✓" }
                    } else {
                        span { class: "contribution-icon non-contributing", "✕" }
                    }
                    "{title.text}"
                }
                if offer_toggle {
                    div {
                        class: "button-bar",
                        button {
                            class: if show_all { "button-bar-item" } else { "button-bar-item active" },
                            onclick: move |_| show_non_contributing.set(false),
                            "Contributing values"
                        }
                        button {
                            class: if show_all { "button-bar-item active" } else { "button-bar-item" },
                            onclick: move |_| show_non_contributing.set(true),
                            "All values"
                        }
                    }
                }
            }
            KeyValueList {
                for row in rows {
                    KeyValueRow {
                        key: "{row.label}",
                        label: row.label.to_string(),
                        {render_row_value(row.value, show_all)}
                    }
                }
            }
        }
    }
}

fn render_row_value(value: VariantRowValue, show_non_contributing: bool) -> Element {
    match value {
        VariantRowValue::Text(text) => rsx! { "{text}" },
        VariantRowValue::List(items) => rsx! {
            ul {
                class: "key-value-list-items",
                for (idx, item) in items.into_iter().enumerate() {
                    li { key: "{idx}", "{item}" }
                }
            }
        },
        VariantRowValue::Tree(component) => rsx! {
            div {
                class: "grouping-tree",
                GroupingComponentView { component, show_non_contributing }
            }
        },
    }
}

/// One node of the grouping tree, recursing into its child components
#[component]
pub fn GroupingComponentView(component: GroupComponent, show_non_contributing: bool) -> Element {
    let label = component
        .name
        .clone()
        .unwrap_or_else(|| component.id.clone());
    let values = visible_values(&component, show_non_contributing);

    rsx! {
        div {
            class: if component.contributing {
                "grouping-component"
            } else {
                "grouping-component non-contributing"
            },
            span { class: "grouping-component-name", "{label}" }
            if let Some(hint) = component.hint.as_ref() {
                span { class: "grouping-component-hint", " ({hint})" }
            }
            ul {
                class: "grouping-component-values",
                for (idx, value) in values.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        {render_component_value(value, show_non_contributing)}
                    }
                }
            }
        }
    }
}

fn render_component_value(value: GroupComponentValue, show_non_contributing: bool) -> Element {
    match value {
        GroupComponentValue::Component(child) => rsx! {
            GroupingComponentView { component: child, show_non_contributing }
        },
        GroupComponentValue::Text(text) => rsx! {
            code { class: "grouping-value", "{text}" }
        },
    }
}
