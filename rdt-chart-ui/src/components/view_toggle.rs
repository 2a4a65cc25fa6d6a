//! Generic view-mode toggle buttons for a chart section.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ViewToggleProps {
    /// (value, label) pairs, one button each
    pub options: Vec<(String, String)>,
    /// Currently active value
    pub active: String,
    /// Called with the selected value
    pub on_select: EventHandler<String>,
}

/// A row of toggle buttons; the active one is highlighted.
#[component]
pub fn ViewToggle(props: ViewToggleProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 6px; margin: 6px 0;",
            for (value, label) in props.options.iter() {
                button {
                    style: if *value == props.active {
                        "padding: 4px 10px; cursor: pointer; background: #0072B2; color: white; border: 1px solid #0072B2; border-radius: 3px;"
                    } else {
                        "padding: 4px 10px; cursor: pointer; background: white; color: #333; border: 1px solid #CCC; border-radius: 3px;"
                    },
                    onclick: {
                        let value = value.clone();
                        let on_select = props.on_select;
                        move |_| on_select.call(value.clone())
                    },
                    "{label}"
                }
            }
        }
    }
}
