//! Shared types between the event API and the event details UI
//!
//! These types mirror the JSON the backend returns for:
//! - an error event (entries, tags, message)
//! - the breadcrumbs recorded before it
//! - the grouping variants that explain why it was merged into an issue
//!
//! Serializable with serde, camelCase on the wire

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Event
// ============================================================================

/// Error event as returned by the event details endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct Event {
    #[serde(default)]
    pub id: String,

    /// Free-form message; empty strings count as absent
    #[serde(default)]
    pub message: Option<String>,

    /// Interface entries (exception, breadcrumbs, request, ...)
    #[serde(default)]
    pub entries: Vec<EventEntry>,

    #[serde(default)]
    pub tags: Vec<EventTag>,

    /// RFC 3339 timestamp of when the event was received
    #[serde(default)]
    pub date_created: Option<String>,
}

impl Event {
    pub fn entry(&self, entry_type: &str) -> Option<&EventEntry> {
        self.entries
            .iter()
            .find(|entry| entry.entry_type == entry_type)
    }

    /// First exception of the `exception` entry, if the entry exists and parses
    pub fn first_exception(&self) -> Option<ExceptionValue> {
        let entry = self.entry(ENTRY_TYPE_EXCEPTION)?;
        let data: ExceptionData = serde_json::from_value(entry.data.clone()).ok()?;
        data.values.into_iter().next()
    }

    /// Breadcrumbs of the `breadcrumbs` entry, each parsed on its own so one
    /// malformed crumb does not take the rest of the trail with it
    pub fn breadcrumbs(&self) -> Vec<Result<Breadcrumb, serde_json::Error>> {
        self.entry(ENTRY_TYPE_BREADCRUMBS)
            .and_then(|entry| entry.data.get("values"))
            .and_then(|values| values.as_array())
            .map(|values| {
                values
                    .iter()
                    .map(|value| serde_json::from_value(value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    pub fn has_message(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|message| !message.is_empty())
    }
}

/// One interface entry; `data` is interpreted according to `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct EventEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct EventTag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct ExceptionData {
    #[serde(default)]
    pub values: Vec<ExceptionValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct ExceptionValue {
    #[serde(default, rename = "type")]
    pub exception_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    /// Module path, usually `path/to/file.ext:line`
    #[serde(default)]
    pub module: Option<String>,
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// Breadcrumb type after normalisation; unrecognised values keep their raw text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub enum BreadcrumbType {
    Info,
    Debug,
    Message,
    Query,
    Ui,
    User,
    Exception,
    Warning,
    Error,
    Http,
    Navigation,
    System,
    Session,
    Transaction,
    #[default]
    Default,
    #[serde(untagged)]
    Other(String),
}

impl BreadcrumbType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Message => "message",
            Self::Query => "query",
            Self::Ui => "ui",
            Self::User => "user",
            Self::Exception => "exception",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Http => "http",
            Self::Navigation => "navigation",
            Self::System => "system",
            Self::Session => "session",
            Self::Transaction => "transaction",
            Self::Default => "default",
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub enum BreadcrumbLevel {
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    #[serde(untagged)]
    Other(String),
}

impl BreadcrumbLevel {
    /// Parse a level tag value; unknown strings are kept as `Other`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "fatal" => Self::Fatal,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "debug" => Self::Debug,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct Breadcrumb {
    #[serde(default, rename = "type")]
    pub crumb_type: BreadcrumbType,
    #[serde(default)]
    pub level: Option<BreadcrumbLevel>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ============================================================================
// Grouping
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub enum GroupVariantType {
    Component,
    CustomFingerprint,
    SaltedComponent,
    /// Variant kinds without type-specific rows, e.g. `checksum`
    #[serde(untagged)]
    Other(String),
}

impl GroupVariantType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Component => "component",
            Self::CustomFingerprint => "custom-fingerprint",
            Self::SaltedComponent => "salted-component",
            Self::Other(raw) => raw,
        }
    }
}

/// One reason an event was grouped; `hash == None` means non-contributing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct GroupVariant {
    #[serde(rename = "type")]
    pub variant_type: GroupVariantType,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub hash_mismatch: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub config: Option<GroupingConfig>,
    #[serde(default)]
    pub component: Option<GroupComponent>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
}

impl GroupVariant {
    pub fn is_contributing(&self) -> bool {
        self.hash.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct GroupingConfig {
    pub id: String,
}

/// Node of the grouping component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub struct GroupComponent {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(alias = "contributes")]
    pub contributing: bool,
    #[serde(default)]
    pub values: Vec<GroupComponentValue>,
}

impl GroupComponent {
    /// Nested components, skipping string leaves
    pub fn children(&self) -> impl Iterator<Item = &GroupComponent> {
        self.values.iter().filter_map(|value| match value {
            GroupComponentValue::Component(component) => Some(component),
            GroupComponentValue::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../../event-details/src/types/generated.ts")]
pub enum GroupComponentValue {
    Component(GroupComponent),
    Text(String),
}

// ============================================================================
// Constants
// ============================================================================

pub const ENTRY_TYPE_EXCEPTION: &str = "exception";
pub const ENTRY_TYPE_BREADCRUMBS: &str = "breadcrumbs";
pub const TAG_LEVEL: &str = "level";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ts_rs::Config;

    #[test]
    fn test_event_first_exception() {
        let event: Event = serde_json::from_value(json!({
            "id": "abc",
            "dateCreated": "2024-03-01T10:00:00Z",
            "entries": [
                {"type": "request", "data": {"url": "/"}},
                {"type": "exception", "data": {"values": [
                    {"type": "ValueError", "value": "boom", "module": "pkg/mod.py:42"},
                    {"type": "KeyError", "value": "second"}
                ]}}
            ]
        }))
        .unwrap();

        let exception = event.first_exception().unwrap();
        assert_eq!(exception.exception_type.as_deref(), Some("ValueError"));
        assert_eq!(exception.module.as_deref(), Some("pkg/mod.py:42"));
        assert_eq!(event.date_created.as_deref(), Some("2024-03-01T10:00:00Z"));
    }

    #[test]
    fn test_malformed_exception_entry_is_absent() {
        let event: Event = serde_json::from_value(json!({
            "entries": [{"type": "exception", "data": {"values": "nope"}}]
        }))
        .unwrap();
        assert!(event.first_exception().is_none());
    }

    #[test]
    fn test_event_breadcrumbs_and_tags() {
        let event: Event = serde_json::from_value(json!({
            "message": "oops",
            "tags": [{"key": "level", "value": "warning"}],
            "entries": [{"type": "breadcrumbs", "data": {"values": [
                {"type": "http", "category": "xhr", "level": "info", "timestamp": "2024-03-01T09:59:58Z"},
                {"type": "custom-thing", "level": "critical"},
                {"category": "auth"}
            ]}}]
        }))
        .unwrap();

        let crumbs: Vec<Breadcrumb> = event
            .breadcrumbs()
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0].crumb_type, BreadcrumbType::Http);
        assert_eq!(crumbs[1].crumb_type, BreadcrumbType::Other("custom-thing".to_string()));
        assert_eq!(crumbs[1].crumb_type.as_str(), "custom-thing");
        assert_eq!(crumbs[1].level, Some(BreadcrumbLevel::Other("critical".to_string())));
        assert_eq!(crumbs[2].crumb_type, BreadcrumbType::Default);
        assert_eq!(event.tag(TAG_LEVEL), Some("warning"));
        assert!(event.has_message());
    }

    #[test]
    fn test_event_without_breadcrumbs_entry() {
        let event = Event::default();
        assert!(event.breadcrumbs().is_empty());
        assert!(!event.has_message());
    }

    #[test]
    fn test_bad_breadcrumb_does_not_drop_the_trail() {
        let event: Event = serde_json::from_value(json!({
            "entries": [{"type": "breadcrumbs", "data": {"values": [
                {"type": "http", "timestamp": "2024-03-01T09:59:58Z"},
                {"type": "ui", "timestamp": 1709287198.5},
                {"type": "navigation"}
            ]}}]
        }))
        .unwrap();

        let crumbs = event.breadcrumbs();
        assert_eq!(crumbs.len(), 3);
        assert!(crumbs[0].is_ok());
        assert!(crumbs[1].is_err());
        assert_eq!(
            crumbs[2].as_ref().unwrap().crumb_type,
            BreadcrumbType::Navigation
        );
    }

    #[test]
    fn test_unknown_raw_values_round_trip() {
        let crumb: Breadcrumb = serde_json::from_value(json!({
            "type": "analytics",
            "level": "critical"
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&crumb.crumb_type).unwrap(),
            json!("analytics")
        );
        assert_eq!(
            serde_json::to_value(crumb.level.as_ref().unwrap()).unwrap(),
            json!("critical")
        );
    }

    #[test]
    fn test_group_variant_deserialization() {
        let variant: GroupVariant = serde_json::from_value(json!({
            "type": "salted-component",
            "hash": null,
            "hashMismatch": true,
            "description": "exception stack-trace",
            "config": {"id": "newstyle:2019-10-29"},
            "values": ["{{ default }}", "custom"],
            "component": {
                "id": "app",
                "name": "in-app",
                "contributing": true,
                "values": [
                    {"id": "exception", "contributing": false, "values": ["ValueError"]},
                    "raw-leaf"
                ]
            }
        }))
        .unwrap();

        assert_eq!(variant.variant_type, GroupVariantType::SaltedComponent);
        assert!(!variant.is_contributing());
        assert!(variant.hash_mismatch);
        let component = variant.component.unwrap();
        assert_eq!(component.values.len(), 2);
        assert_eq!(component.children().count(), 1);
        assert_eq!(component.children().next().unwrap().id, "exception");
    }

    #[test]
    fn test_unknown_variant_type() {
        let variant: GroupVariant = serde_json::from_value(json!({
            "type": "checksum",
            "hash": "deadbeef",
            "description": "legacy checksum"
        }))
        .unwrap();
        assert_eq!(
            variant.variant_type,
            GroupVariantType::Other("checksum".to_string())
        );
        assert_eq!(variant.variant_type.as_str(), "checksum");
        assert!(variant.is_contributing());
    }

    #[test]
    fn test_breadcrumb_type_serialization() {
        let json = serde_json::to_string(&BreadcrumbType::Navigation).unwrap();
        assert_eq!(json, "\"navigation\"");
        assert_eq!(BreadcrumbLevel::parse("warning"), BreadcrumbLevel::Warning);
        assert_eq!(
            BreadcrumbLevel::parse("loud"),
            BreadcrumbLevel::Other("loud".to_string())
        );
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro sets the output file
        let config = Config::default();
        Event::export(&config).unwrap();
        EventEntry::export(&config).unwrap();
        EventTag::export(&config).unwrap();
        ExceptionData::export(&config).unwrap();
        ExceptionValue::export(&config).unwrap();
        BreadcrumbType::export(&config).unwrap();
        BreadcrumbLevel::export(&config).unwrap();
        Breadcrumb::export(&config).unwrap();
        GroupVariantType::export(&config).unwrap();
        GroupVariant::export(&config).unwrap();
        GroupingConfig::export(&config).unwrap();
        GroupComponent::export(&config).unwrap();
        GroupComponentValue::export(&config).unwrap();
    }
}
