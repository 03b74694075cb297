pub const EVENT_DETAILS_STYLES: &str = r#"
/* Page */
.event-details {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1.5rem;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--text-primary, #2f2936);
}

.event-details-title {
    margin: 0 0 1.5rem 0;
    font-size: 1.25rem;
    word-break: break-word;
}

/* Sections */
.event-section {
    margin-bottom: 2rem;
}

.event-section-header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.event-section-header h3 {
    margin: 0;
    font-size: 0.9rem;
    text-transform: uppercase;
    letter-spacing: 0.02em;
}

/* Key/value list */
.key-value-list {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.8rem;
}

.key-value-row {
    border-bottom: 1px solid var(--border-color, #e7e1ec);
}

.key-value-key {
    width: 180px;
    padding: 0.4rem 0.75rem 0.4rem 0;
    color: var(--text-secondary, #645574);
    vertical-align: top;
    white-space: nowrap;
}

.key-value-value {
    padding: 0.4rem 0;
    font-family: monospace;
    word-break: break-word;
}

.key-value-list-items {
    margin: 0;
    padding-left: 1rem;
}

/* Loading and error states */
.status-view {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 12rem;
    padding: 2rem;
    text-align: center;
    color: var(--text-muted, #6b7280);
}

.status-error {
    color: var(--danger-text, #ef4444);
}

.status-error-title {
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.status-error-detail {
    font-size: 0.875rem;
    color: var(--text-secondary, #9ca3af);
}

.status-retry {
    margin-top: 1rem;
    padding: 0.35rem 0.9rem;
    border: 1px solid var(--border-color, #e7e1ec);
    border-radius: 4px;
    background: transparent;
    cursor: pointer;
}

/* Empty results */
.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem 1rem;
    color: var(--text-secondary, #645574);
    text-align: center;
}

.empty-icon {
    font-size: 2rem;
    margin-bottom: 0.5rem;
}
"#;
