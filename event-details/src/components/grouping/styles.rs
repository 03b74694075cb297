pub const GROUPING_STYLES: &str = r#"
.grouping-variant {
    margin-bottom: 2rem;
}

.grouping-variant-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.grouping-variant-title {
    display: flex;
    align-items: center;
    margin: 0;
    font-size: 0.9rem;
}

.contribution-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 18px;
    height: 18px;
    margin-right: 0.5rem;
    border: 1px solid currentColor;
    border-radius: 50%;
    font-size: 0.7rem;
}

.contribution-icon.contributing {
    color: #4dc771;
}

.contribution-icon.non-contributing {
    color: #e03e2f;
}

.button-bar {
    display: inline-flex;
}

.button-bar-item {
    padding: 0.2rem 0.6rem;
    border: 1px solid var(--border-color, #c6becf);
    background: var(--bg-primary, #ffffff);
    font-size: 0.75rem;
    cursor: pointer;
}

.button-bar-item + .button-bar-item {
    border-left: 0;
}

.button-bar-item:first-child {
    border-radius: 4px 0 0 4px;
}

.button-bar-item:last-child {
    border-radius: 0 4px 4px 0;
}

.button-bar-item.active {
    background: var(--accent-bg, #6c5fc7);
    border-color: var(--accent-bg, #6c5fc7);
    color: #ffffff;
}

.grouping-tree {
    color: #2f2936;
}

.grouping-component {
    font-size: 0.8rem;
}

.grouping-component.non-contributing {
    opacity: 0.45;
}

.grouping-component-name {
    font-weight: 600;
}

.grouping-component-hint {
    color: var(--text-secondary, #9585a3);
    font-style: italic;
}

.grouping-component-values {
    list-style: none;
    margin: 0;
    padding-left: 1rem;
}

.grouping-value {
    padding: 0 0.25rem;
    background: var(--bg-secondary, #faf9fb);
    border-radius: 3px;
}
"#;
