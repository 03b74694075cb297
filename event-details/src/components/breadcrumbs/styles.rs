pub const BREADCRUMBS_STYLES: &str = r#"
.breadcrumbs-search {
    display: flex;
    align-items: stretch;
    width: 600px;
    max-width: 100%;
}

.breadcrumbs-search-input {
    flex: 1;
    height: 32px;
    padding: 0 0.6rem;
    border: 1px solid var(--border-color, #c6becf);
    border-radius: 0 4px 4px 0;
    font-size: 0.85rem;
}

.breadcrumbs-search-clear {
    margin-left: -2rem;
    width: 2rem;
    border: none;
    background: transparent;
    color: var(--text-secondary, #9585a3);
    cursor: pointer;
}

.breadcrumbs-filter {
    position: relative;
    display: flex;
}

.breadcrumbs-filter-button {
    white-space: nowrap;
    max-width: 200px;
    padding: 0 0.75rem;
    border: 1px solid var(--border-color, #c6becf);
    border-right: 0;
    border-radius: 4px 0 0 4px;
    background: var(--bg-primary, #ffffff);
    font-size: 0.8rem;
    cursor: pointer;
}

.breadcrumbs-filter-button.primary {
    background: var(--accent-bg, #6c5fc7);
    border-color: var(--accent-bg, #6c5fc7);
    color: #ffffff;
}

.breadcrumbs-filter-menu {
    position: absolute;
    top: 100%;
    left: 0;
    width: 240px;
    z-index: 10;
    background: var(--bg-primary, #ffffff);
    border: 1px solid var(--border-color, #c6becf);
    border-radius: 0 4px 4px 4px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.breadcrumbs-filter-menu-header,
.breadcrumbs-filter-group-title {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem 1rem;
    background: var(--bg-secondary, #faf9fb);
    color: var(--text-secondary, #645574);
    font-size: 0.8rem;
    border-bottom: 1px solid var(--border-color, #c6becf);
}

.breadcrumbs-filter-check-all {
    border: none;
    background: transparent;
    color: var(--link-color, #3b6ecc);
    cursor: pointer;
}

.breadcrumbs-filter-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.breadcrumbs-filter-item {
    display: grid;
    grid-template-columns: max-content 1fr max-content;
    column-gap: 0.5rem;
    align-items: center;
    padding: 0.5rem 1rem;
    border-bottom: 1px solid var(--border-color, #c6becf);
    cursor: pointer;
}

.breadcrumbs-filter-item input {
    opacity: 0.3;
}

.breadcrumbs-filter-item.checked input,
.breadcrumbs-filter-item:hover input {
    opacity: 1;
}

.breadcrumbs-content {
    border: 1px solid var(--border-color, #c6becf);
    border-radius: 4px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
    margin-bottom: 1.5rem;
}

.breadcrumbs-row {
    display: grid;
    grid-template-columns: 160px 140px 1fr 80px 90px;
    column-gap: 0.75rem;
    align-items: center;
    padding: 0.5rem 1rem;
    border-bottom: 1px solid var(--border-color, #e7e1ec);
    font-size: 0.8rem;
}

.breadcrumbs-list-header {
    background: var(--bg-secondary, #faf9fb);
    color: var(--text-secondary, #645574);
    text-transform: uppercase;
    font-weight: 600;
    font-size: 0.7rem;
}

.breadcrumb.virtual {
    background: color-mix(in srgb, #e03e2f 6%, transparent);
}

.breadcrumb-type {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.breadcrumb-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 22px;
    height: 22px;
    border: 1px solid currentColor;
    border-radius: 50%;
    font-size: 0.7rem;
}

.breadcrumb-description {
    font-family: monospace;
    word-break: break-word;
}

.breadcrumb-level.level-error,
.breadcrumb-level.level-fatal {
    color: #e03e2f;
}

.breadcrumb-level.level-warning {
    color: #f5a623;
}

.breadcrumb-time {
    color: var(--text-secondary, #9585a3);
    text-align: right;
}

.breadcrumbs-collapsed {
    display: block;
    width: 100%;
    padding: 0.5rem 1rem;
    border: none;
    border-bottom: 1px solid var(--border-color, #e7e1ec);
    background: var(--bg-secondary, #faf9fb);
    color: var(--link-color, #3b6ecc);
    text-align: left;
    cursor: pointer;
}

.breadcrumbs-reset-filter {
    margin-top: 0.75rem;
    padding: 0.4rem 0.9rem;
    border: none;
    border-radius: 4px;
    background: var(--accent-bg, #6c5fc7);
    color: #ffffff;
    cursor: pointer;
}
"#;
