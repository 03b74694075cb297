use dioxus::prelude::*;

/// Loading text, naming the event once one is selected
pub fn loading_label(event_id: Option<&str>) -> String {
    match event_id {
        Some(id) if !id.is_empty() => format!("Loading event {id}..."),
        _ => "Loading event...".to_string(),
    }
}

#[component]
pub fn LoadingState(event_id: Option<String>) -> Element {
    let label = loading_label(event_id.as_deref());

    rsx! {
        div { class: "status-view status-loading", "{label}" }
    }
}

/// Failed load with the backend's message; `on_retry` adds a retry button
#[component]
pub fn ErrorState(error: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "status-view status-error",
            p { class: "status-error-title", "Error loading event" }
            p { class: "status-error-detail", "{error}" }
            if on_retry.is_some() {
                button {
                    class: "status-retry",
                    onclick: move |_| {
                        if let Some(on_retry) = on_retry {
                            on_retry.call(());
                        }
                    },
                    "Retry"
                }
            }
        }
    }
}
