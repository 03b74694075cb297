use std::sync::OnceLock;

use url::form_urlencoded;

const DEFAULT_ORG: &str = "sentry";
const DEFAULT_PROJECT: &str = "internal";

const LOCAL_API_BASE: &str = "http://localhost:8080";

static API_BASE: OnceLock<String> = OnceLock::new();

/// Local dev pages talk to the API on :8080; deployed pages use their own origin
pub fn api_base_for_host(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" | "[::1]" => LOCAL_API_BASE,
        _ => "",
    }
}

pub fn api_base() -> &'static str {
    API_BASE
        .get_or_init(|| {
            let hostname = web_sys::window()
                .and_then(|w| w.location().hostname().ok())
                .unwrap_or_default();
            api_base_for_host(&hostname).to_string()
        })
        .as_str()
}

/// Which event the page shows and where to fetch it from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDetailsConfig {
    pub api_base: String,
    pub org: String,
    pub project: String,
    pub event_id: Option<String>,
}

impl EventDetailsConfig {
    /// Parse `?org=…&project=…&event=…` as form-urlencoded; missing or
    /// blank keys fall back to defaults
    pub fn from_query(api_base: &str, query: &str) -> Self {
        let mut config = Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            org: DEFAULT_ORG.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            event_id: None,
        };

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            match key.as_ref() {
                "org" => config.org = value.to_string(),
                "project" => config.project = value.to_string(),
                "event" => config.event_id = Some(value.to_string()),
                _ => {}
            }
        }

        config
    }

    pub fn from_location() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(api_base(), &query)
    }

    pub fn event_url(&self, event_id: &str) -> String {
        format!(
            "{}/api/0/projects/{}/{}/events/{}/",
            self.api_base, self.org, self.project, event_id
        )
    }

    pub fn grouping_info_url(&self, event_id: &str) -> String {
        format!("{}grouping-info/", self.event_url(event_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_defaults() {
        let config = EventDetailsConfig::from_query(
            "http://localhost:8080/",
            "?org=acme&project=checkout&event=9f2c&utm=ignored",
        );
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.org, "acme");
        assert_eq!(config.project, "checkout");
        assert_eq!(config.event_id.as_deref(), Some("9f2c"));
        assert_eq!(
            config.grouping_info_url("9f2c"),
            "http://localhost:8080/api/0/projects/acme/checkout/events/9f2c/grouping-info/"
        );
    }

    #[test]
    fn empty_query_uses_defaults() {
        let config = EventDetailsConfig::from_query("", "");
        assert_eq!(config.org, "sentry");
        assert_eq!(config.project, "internal");
        assert_eq!(config.event_id, None);
        assert_eq!(
            config.event_url("abc"),
            "/api/0/projects/sentry/internal/events/abc/"
        );
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let config =
            EventDetailsConfig::from_query("", "?org=my%2Dorg&project=web+app&event=ab%20c");
        assert_eq!(config.org, "my-org");
        assert_eq!(config.project, "web app");
        assert_eq!(config.event_id.as_deref(), Some("ab c"));
    }

    #[test]
    fn api_base_follows_hostname() {
        assert_eq!(api_base_for_host("localhost"), "http://localhost:8080");
        assert_eq!(api_base_for_host("127.0.0.1"), "http://localhost:8080");
        assert_eq!(api_base_for_host("sentry.example.com"), "");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = EventDetailsConfig::from_query("", "?event=&org");
        assert_eq!(config.event_id, None);
        assert_eq!(config.org, "sentry");
    }
}
