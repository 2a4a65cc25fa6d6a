//! Banner for data-loading failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Non-blocking error banner. Individual charts degrade to their own
/// "no data" placeholders; this banner covers failures that affect the
/// whole dashboard, like the trend export being unreachable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 10px 14px; margin: 8px 0; background: #FDF3F2; color: #A3352B; border-left: 4px solid #D55E00; border-radius: 0 4px 4px 0; font-size: 13px;",
            span {
                style: "font-weight: 600; margin-right: 6px;",
                "Data unavailable:"
            }
            "{props.message}"
        }
    }
}
