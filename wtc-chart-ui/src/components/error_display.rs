//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What was being attempted, e.g. "Loading dashboard"
    #[props(default = String::new())]
    pub context: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let heading = if props.context.is_empty() {
        "Error: ".to_string()
    } else {
        format!("{} failed: ", props.context)
    };

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{heading}" }
            "{props.message}"
        }
    }
}
