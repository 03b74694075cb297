//! Event details page
//!
//! Loads one event and its grouping variants, then mounts the breadcrumb
//! timeline and the grouping information below the event title.

use dioxus::prelude::*;
use shared_types::{Breadcrumb, Event, GroupVariant};

use crate::api::{fetch_event, fetch_grouping_variants, parse_breadcrumbs};
use crate::components::status_views::{ErrorState, LoadingState};
use crate::components::styles::EVENT_DETAILS_STYLES;
use crate::components::{BreadcrumbsSection, GroupingInfo};
use crate::config::EventDetailsConfig;

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Loaded {
        event: Event,
        breadcrumbs: Vec<Breadcrumb>,
        variants: Vec<GroupVariant>,
    },
    Failed(String),
}

async fn load_event(config: EventDetailsConfig) -> LoadState {
    let Some(event_id) = config.event_id.clone() else {
        return LoadState::Failed("No event selected: add ?event=<id> to the URL".to_string());
    };

    let event = match fetch_event(&config, &event_id).await {
        Ok(event) => event,
        Err(e) => {
            dioxus_logger::tracing::error!("Failed to fetch event {}: {}", event_id, e);
            return LoadState::Failed(e.to_string());
        }
    };

    let breadcrumbs = parse_breadcrumbs(&event);

    // Grouping info is optional; the breadcrumbs still render without it
    let variants = match fetch_grouping_variants(&config, &event_id).await {
        Ok(variants) => variants,
        Err(e) => {
            dioxus_logger::tracing::error!("Failed to fetch grouping info for {}: {}", event_id, e);
            Vec::new()
        }
    };

    LoadState::Loaded {
        event,
        breadcrumbs,
        variants,
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(EventDetailsConfig::from_location);
    let event_id = config.event_id.clone();
    let mut state = use_signal(|| LoadState::Loading);
    let mut load_started = use_signal(|| false);

    use_effect(move || {
        if load_started() {
            return;
        }
        load_started.set(true);

        let config = config.clone();
        spawn(async move {
            state.set(load_event(config).await);
        });
    });

    let content = match state() {
        LoadState::Loading => rsx! { LoadingState { event_id } },
        LoadState::Failed(error) => rsx! {
            ErrorState {
                error,
                on_retry: move |_| {
                    state.set(LoadState::Loading);
                    load_started.set(false);
                },
            }
        },
        LoadState::Loaded {
            event,
            breadcrumbs,
            variants,
        } => {
            let title = event
                .message
                .clone()
                .filter(|message| !message.is_empty())
                .or_else(|| {
                    event
                        .first_exception()
                        .and_then(|exception| exception.exception_type)
                })
                .unwrap_or_else(|| "<unlabeled event>".to_string());
            rsx! {
                h2 { class: "event-details-title", "{title}" }
                BreadcrumbsSection { event, breadcrumbs }
                GroupingInfo { variants }
            }
        }
    };

    rsx! {
        style { {EVENT_DETAILS_STYLES} }
        div {
            class: "event-details",
            {content}
        }
    }
}
