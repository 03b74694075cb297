use gloo_net::http::{Request, Response};
use shared_types::{Breadcrumb, Event, GroupVariant};

use crate::config::EventDetailsConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {status}{detail}")]
    Status { status: u16, detail: String },
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

async fn describe_http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return ApiError::Status {
            status,
            detail: String::new(),
        };
    }

    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .map(ToString::to_string)
        })
        .unwrap_or(body);

    ApiError::Status {
        status,
        detail: format!(" ({detail})"),
    }
}

async fn get_ok(url: &str) -> Result<Response, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }
    Ok(response)
}

pub async fn fetch_event(config: &EventDetailsConfig, event_id: &str) -> Result<Event, ApiError> {
    get_ok(&config.event_url(event_id))
        .await?
        .json::<Event>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_grouping_variants(
    config: &EventDetailsConfig,
    event_id: &str,
) -> Result<Vec<GroupVariant>, ApiError> {
    let variants = get_ok(&config.grouping_info_url(event_id))
        .await?
        .json::<serde_json::Map<String, serde_json::Value>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parse_grouping_info(variants))
}

/// Breadcrumbs of an event in order; crumbs that fail to parse are skipped
pub fn parse_breadcrumbs(event: &Event) -> Vec<Breadcrumb> {
    event
        .breadcrumbs()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, crumb)| match crumb {
            Ok(crumb) => Some(crumb),
            Err(e) => {
                dioxus_logger::tracing::warn!("Skipping breadcrumb {idx} of event {}: {e}", event.id);
                None
            }
        })
        .collect()
}

/// Variants of a grouping-info response in key order; malformed ones are skipped
pub fn parse_grouping_info(variants: serde_json::Map<String, serde_json::Value>) -> Vec<GroupVariant> {
    variants
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<GroupVariant>(value) {
            Ok(variant) => Some(variant),
            Err(e) => {
                dioxus_logger::tracing::warn!("Skipping grouping variant {key}: {e}");
                None
            }
        })
        .collect()
}
