use dioxus::prelude::*;

/// Two-column label/value table; rows render in the order given
#[component]
pub fn KeyValueList(children: Element) -> Element {
    rsx! {
        table {
            class: "key-value-list",
            tbody { {children} }
        }
    }
}

#[component]
pub fn KeyValueRow(label: String, children: Element) -> Element {
    rsx! {
        tr {
            class: "key-value-row",
            td { class: "key-value-key", "{label}" }
            td { class: "key-value-value", {children} }
        }
    }
}
