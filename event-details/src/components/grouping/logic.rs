//! Grouping variant pure logic — no RSX, no signals

use shared_types::{GroupComponent, GroupComponentValue, GroupVariant, GroupVariantType};

pub const HASH_MISMATCH_TEXT: &str =
    "hashing algorithm produced a hash that does not match the event";

#[derive(Clone, Debug, PartialEq)]
pub enum VariantRowValue {
    Text(String),
    List(Vec<String>),
    Tree(GroupComponent),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantRow {
    pub label: &'static str,
    pub value: VariantRowValue,
}

impl VariantRow {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: VariantRowValue::Text(value.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantTitle {
    pub is_contributing: bool,
    pub text: String,
    pub tooltip: &'static str,
}

/// Component tree shown for this variant type, if any
pub fn variant_component(variant: &GroupVariant) -> Option<&GroupComponent> {
    match variant.variant_type {
        GroupVariantType::Component | GroupVariantType::SaltedComponent => {
            variant.component.as_ref()
        }
        GroupVariantType::CustomFingerprint | GroupVariantType::Other(_) => None,
    }
}

/// Label/value rows in display order: type, hash, mismatch, type-specific
/// fields, then the component tree.
pub fn variant_rows(variant: &GroupVariant) -> Vec<VariantRow> {
    let mut rows = vec![VariantRow::text("Type", variant.variant_type.as_str())];

    if let Some(hash) = variant.hash.as_deref() {
        rows.push(VariantRow::text("Hash", hash));
    }

    if variant.hash_mismatch {
        rows.push(VariantRow::text("Hash mismatch", HASH_MISMATCH_TEXT));
    }

    let fingerprint_row = variant.values.as_ref().map(|values| VariantRow {
        label: "Fingerprint values",
        value: VariantRowValue::List(values.clone()),
    });
    let config_row = variant
        .config
        .as_ref()
        .filter(|config| !config.id.is_empty())
        .map(|config| VariantRow::text("Grouping Config", config.id.clone()));

    match variant.variant_type {
        GroupVariantType::Component => rows.extend(config_row),
        GroupVariantType::CustomFingerprint => rows.extend(fingerprint_row),
        GroupVariantType::SaltedComponent => {
            rows.extend(fingerprint_row);
            rows.extend(config_row);
        }
        GroupVariantType::Other(_) => {}
    }

    if let Some(component) = variant_component(variant) {
        rows.push(VariantRow {
            label: "Grouping",
            value: VariantRowValue::Tree(component.clone()),
        });
    }

    rows
}

/// True when any node of the tree, the root included, is non-contributing
pub fn has_non_contributing_component(component: Option<&GroupComponent>) -> bool {
    let Some(component) = component else {
        return false;
    };
    !component.contributing
        || component
            .children()
            .any(|child| has_non_contributing_component(Some(child)))
}

/// Values of a node that should render; non-contributing child nodes are
/// dropped unless `show_non_contributing` is set.
pub fn visible_values(
    component: &GroupComponent,
    show_non_contributing: bool,
) -> Vec<GroupComponentValue> {
    component
        .values
        .iter()
        .filter(|value| match value {
            GroupComponentValue::Component(child) => show_non_contributing || child.contributing,
            GroupComponentValue::Text(_) => true,
        })
        .cloned()
        .collect()
}

pub fn variant_title(variant: &GroupVariant) -> VariantTitle {
    let is_contributing = variant.is_contributing();
    let description = variant
        .description
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    VariantTitle {
        is_contributing,
        text: format!("By {description}"),
        tooltip: if is_contributing {
            "Contributing variant"
        } else {
            "Non-contributing variant"
        },
    }
}

/// Uppercase first character, lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = first.to_uppercase().collect::<String>();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Contributing variants first, backend order otherwise
pub fn sort_variants(mut variants: Vec<GroupVariant>) -> Vec<GroupVariant> {
    variants.sort_by_key(|variant| !variant.is_contributing());
    variants
}
