//! Reusable Dioxus RSX components for the RDT dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod filter_panel;
mod loading_spinner;
mod view_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use filter_panel::FilterPanel;
pub use loading_spinner::LoadingSpinner;
pub use view_toggle::ViewToggle;
