//! Full-page loading indicator shown while the sources fetch.

use dioxus::prelude::*;

/// Placeholder shown between mount and the first `DataBundle`. The eight
/// sources load concurrently, so this is usually visible only briefly.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; align-items: center; padding: 56px 0; color: #667;",
            div {
                style: "font-size: 15px;",
                "Loading roadside testing data\u{2026}"
            }
            div {
                style: "font-size: 12px; color: #99A;",
                "Fetching detection, testing and population exports"
            }
        }
    }
}
