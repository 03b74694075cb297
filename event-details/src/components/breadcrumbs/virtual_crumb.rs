use std::sync::OnceLock;

use regex::Regex;
use shared_types::{Breadcrumb, BreadcrumbLevel, BreadcrumbType, Event, TAG_LEVEL};

const EXCEPTION_CATEGORY: &str = "exception";
const MESSAGE_CATEGORY: &str = "message";

fn module_line_regex() -> &'static Regex {
    static MODULE_LINE_RE: OnceLock<Regex> = OnceLock::new();
    MODULE_LINE_RE.get_or_init(|| Regex::new(r"^.*/(.*?)(:\d+)").expect("valid regex"))
}

/// File stem of the last path segment that carries a `:line` suffix.
///
/// `pkg/mod.py:42` yields `mod`. Paths without a line suffix yield `None`.
pub fn module_to_category(module: Option<&str>) -> Option<String> {
    let module = module.filter(|module| !module.is_empty())?;
    let captures = module_line_regex().captures(module)?;
    let segment = captures.get(1)?.as_str();
    let stem = segment.split('.').next().unwrap_or(segment);
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Breadcrumb standing for the error itself, appended after the recorded ones.
///
/// An exception entry takes priority over the event message. Events with
/// neither get no virtual breadcrumb.
pub fn virtual_breadcrumb(event: &Event) -> Option<Breadcrumb> {
    if let Some(exception) = event.first_exception() {
        let mut data = serde_json::Map::new();
        if let Some(exception_type) = exception.exception_type {
            data.insert("type".to_string(), serde_json::Value::String(exception_type));
        }
        if let Some(value) = exception.value {
            data.insert("value".to_string(), serde_json::Value::String(value));
        }

        return Some(Breadcrumb {
            crumb_type: BreadcrumbType::Error,
            level: Some(BreadcrumbLevel::Error),
            category: Some(
                module_to_category(exception.module.as_deref())
                    .unwrap_or_else(|| EXCEPTION_CATEGORY.to_string()),
            ),
            message: None,
            data: (!data.is_empty()).then_some(serde_json::Value::Object(data)),
            timestamp: event.date_created.clone(),
        });
    }

    if !event.has_message() {
        return None;
    }

    Some(Breadcrumb {
        crumb_type: BreadcrumbType::Error,
        level: event.tag(TAG_LEVEL).map(BreadcrumbLevel::parse),
        category: Some(MESSAGE_CATEGORY.to_string()),
        message: event.message.clone(),
        data: None,
        timestamp: event.date_created.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        serde_json::from_value(value).expect("valid event fixture")
    }

    #[test]
    fn module_category_takes_file_stem_before_line() {
        assert_eq!(
            module_to_category(Some("pkg/mod.py:42")).as_deref(),
            Some("mod")
        );
        assert_eq!(
            module_to_category(Some("app/static/views/page.tsx:10:3")).as_deref(),
            Some("page")
        );
    }

    #[test]
    fn module_category_without_line_suffix_is_absent() {
        assert_eq!(module_to_category(Some("pkg.mod")), None);
        assert_eq!(module_to_category(Some("pkg/mod.py")), None);
        assert_eq!(module_to_category(Some("")), None);
        assert_eq!(module_to_category(None), None);
    }

    #[test]
    fn exception_entry_builds_error_crumb() {
        let event = event(json!({
            "message": "ignored because an exception exists",
            "dateCreated": "2024-03-01T10:00:00Z",
            "entries": [{"type": "exception", "data": {"values": [
                {"type": "ValueError", "value": "boom", "module": "pkg/mod.py:42"}
            ]}}]
        }));

        let crumb = virtual_breadcrumb(&event).expect("virtual crumb");
        assert_eq!(crumb.crumb_type, BreadcrumbType::Error);
        assert_eq!(crumb.level, Some(BreadcrumbLevel::Error));
        assert_eq!(crumb.category.as_deref(), Some("mod"));
        assert_eq!(crumb.data, Some(json!({"type": "ValueError", "value": "boom"})));
        assert_eq!(crumb.message, None);
        assert_eq!(crumb.timestamp.as_deref(), Some("2024-03-01T10:00:00Z"));
    }

    #[test]
    fn exception_without_module_falls_back_to_exception_category() {
        let event = event(json!({
            "entries": [{"type": "exception", "data": {"values": [
                {"type": "KeyError", "value": "'id'"}
            ]}}]
        }));

        let crumb = virtual_breadcrumb(&event).expect("virtual crumb");
        assert_eq!(crumb.category.as_deref(), Some("exception"));
    }

    #[test]
    fn message_event_uses_level_tag() {
        let event = event(json!({
            "message": "oops",
            "tags": [{"key": "browser", "value": "Firefox"}, {"key": "level", "value": "warning"}]
        }));

        let crumb = virtual_breadcrumb(&event).expect("virtual crumb");
        assert_eq!(crumb.crumb_type, BreadcrumbType::Error);
        assert_eq!(crumb.level, Some(BreadcrumbLevel::Warning));
        assert_eq!(crumb.category.as_deref(), Some("message"));
        assert_eq!(crumb.message.as_deref(), Some("oops"));
    }

    #[test]
    fn message_event_without_level_tag_has_no_level() {
        let crumb = virtual_breadcrumb(&event(json!({"message": "oops"}))).expect("virtual crumb");
        assert_eq!(crumb.level, None);
    }

    #[test]
    fn event_without_exception_or_message_has_no_virtual_crumb() {
        assert!(virtual_breadcrumb(&event(json!({"message": ""}))).is_none());
        assert!(virtual_breadcrumb(&Event::default()).is_none());
    }
}
