//! Breadcrumb pipeline: load, then filter → search → collapse.
//!
//! Every stage only narrows its input. The loaded list is kept as the single
//! source and the later stages are recomputed from it.

use shared_types::{Breadcrumb, Event};

use super::convert::{breadcrumb_type_details, convert_breadcrumb_type};
use super::types::{
    BreadcrumbWithDetails, CollapsedView, FilterOptions, LevelOption, TypeOption,
    MAX_CRUMBS_WHEN_COLLAPSED,
};
use super::virtual_crumb::virtual_breadcrumb;

// ── Load ─────────────────────────────────────────────────────────────────────

/// Raw crumbs plus the virtual one, typed and enriched
pub fn load_breadcrumbs(event: &Event, raw: &[Breadcrumb]) -> Vec<BreadcrumbWithDetails> {
    let mut breadcrumbs = raw.to_vec();
    let virtual_crumb = virtual_breadcrumb(event);
    let has_virtual = virtual_crumb.is_some();
    breadcrumbs.extend(virtual_crumb);

    let mut transformed = transform_breadcrumbs(breadcrumbs);
    if has_virtual {
        if let Some(last) = transformed.last_mut() {
            last.is_virtual = true;
        }
    }
    transformed
}

pub fn transform_breadcrumbs(breadcrumbs: Vec<Breadcrumb>) -> Vec<BreadcrumbWithDetails> {
    breadcrumbs
        .into_iter()
        .enumerate()
        .map(|(id, crumb)| {
            let crumb = convert_breadcrumb_type(crumb);
            let details = breadcrumb_type_details(&crumb.crumb_type);
            BreadcrumbWithDetails {
                id,
                crumb,
                details,
                is_virtual: false,
            }
        })
        .collect()
}

// ── Filter ───────────────────────────────────────────────────────────────────

/// One checked option per distinct type and per distinct level, first-seen order
pub fn derive_filter_options(breadcrumbs: &[BreadcrumbWithDetails]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for breadcrumb in breadcrumbs {
        let level = breadcrumb.crumb.level.as_ref();
        match options
            .types
            .iter_mut()
            .find(|option| option.crumb_type == breadcrumb.crumb.crumb_type)
        {
            Some(option) => {
                if let Some(level) = level {
                    if !option.levels.contains(level) {
                        option.levels.push(level.clone());
                    }
                }
            }
            None => options.types.push(TypeOption {
                crumb_type: breadcrumb.crumb.crumb_type.clone(),
                details: breadcrumb.details,
                levels: level.into_iter().cloned().collect(),
                is_checked: true,
            }),
        }

        if let Some(level) = level {
            if !options.levels.iter().any(|option| &option.level == level) {
                options.levels.push(LevelOption {
                    level: level.clone(),
                    details: breadcrumb.details,
                    is_checked: true,
                });
            }
        }
    }

    options
}

/// Type/level narrowing. Which checkbox combinations remove which rows is not
/// settled yet, so every crumb passes.
pub fn filter_by_options(
    breadcrumbs: &[BreadcrumbWithDetails],
    _options: &FilterOptions,
) -> Vec<BreadcrumbWithDetails> {
    breadcrumbs.to_vec()
}

// ── Search ───────────────────────────────────────────────────────────────────

pub fn filter_by_search_term(
    breadcrumbs: &[BreadcrumbWithDetails],
    search_term: &str,
) -> Vec<BreadcrumbWithDetails> {
    if search_term.is_empty() {
        return breadcrumbs.to_vec();
    }
    let search_term = search_term.to_lowercase();

    breadcrumbs
        .iter()
        .filter(|breadcrumb| matches_search_term(&breadcrumb.crumb, &search_term))
        .cloned()
        .collect()
}

/// Case-insensitive match against the JSON form of any defined, non-blank
/// searchable field. `search_term` must already be lowercase.
pub fn matches_search_term(crumb: &Breadcrumb, search_term: &str) -> bool {
    searchable_fields(crumb)
        .into_iter()
        .flatten()
        .filter(|value| !is_blank(value))
        .any(|value| {
            serde_json::to_string(&value)
                .map(|json| json.to_lowercase().contains(search_term))
                .unwrap_or(false)
        })
}

fn searchable_fields(crumb: &Breadcrumb) -> [Option<serde_json::Value>; 6] {
    [
        serde_json::to_value(&crumb.crumb_type).ok(),
        crumb.category.clone().map(serde_json::Value::String),
        crumb.message.clone().map(serde_json::Value::String),
        crumb
            .level
            .as_ref()
            .and_then(|level| serde_json::to_value(level).ok()),
        crumb.timestamp.clone().map(serde_json::Value::String),
        crumb.data.clone(),
    ]
}

fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(text) => text.trim().is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

// ── Collapse ─────────────────────────────────────────────────────────────────

pub fn collapse_breadcrumbs(
    breadcrumbs: &[BreadcrumbWithDetails],
    is_collapsed: bool,
) -> CollapsedView {
    let visible = if is_collapsed && breadcrumbs.len() > MAX_CRUMBS_WHEN_COLLAPSED {
        &breadcrumbs[breadcrumbs.len() - MAX_CRUMBS_WHEN_COLLAPSED..]
    } else {
        breadcrumbs
    };

    CollapsedView {
        breadcrumbs: visible.to_vec(),
        collapsed_quantity: breadcrumbs.len() - visible.len(),
    }
}
