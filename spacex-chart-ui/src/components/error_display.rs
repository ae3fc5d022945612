//! Fatal error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Short heading shown before the message
    #[props(default = "Failed to load launch data".to_string())]
    pub heading: String,
}

/// Shown instead of the widgets when the dataset cannot be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.heading}: " }
            "{props.message}"
        }
    }
}
