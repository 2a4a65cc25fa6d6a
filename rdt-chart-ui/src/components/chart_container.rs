//! Card-style container the D3 renderers draw into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the matching `js_bridge::render_*` call targets.
    pub id: String,
    /// Whether the chart's data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels, sized per chart type
    #[props(default = 400)]
    pub min_height: u32,
}

/// A bordered card holding one chart. The inner div stays empty on the
/// Rust side; D3 owns its contents entirely, so re-renders never race the
/// virtual DOM.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            style: "min-height: {props.min_height}px; position: relative; margin-bottom: 24px; padding: 12px; background: #fff; border: 1px solid #E4E8EC; border-radius: 6px;",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); font-size: 13px; color: #888;",
                    "Preparing chart\u{2026}"
                }
            }
            div {
                id: "{props.id}",
                class: "rdt-chart",
                style: "width: 100%;",
            }
        }
    }
}
