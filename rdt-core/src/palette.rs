//! Centralized chart color palette (Okabe-Ito, colorblind-safe).
//!
//! All charts reference these for visual consistency.

pub const BLUE: &str = "#0072B2";
pub const VERMILLION: &str = "#D55E00";
pub const TEAL: &str = "#009E73";
pub const PINK: &str = "#CC79A7";
pub const MUTED: &str = "#666666";
pub const OTHER: &str = "#999999";

/// Trend chart semantic colors.
pub mod trend {
    pub const LINE: &str = super::BLUE;
    pub const AREA: &str = super::BLUE;
    pub const ANNOTATION: &str = super::VERMILLION;
}

/// Donut chart semantic colors.
pub mod donut {
    pub const CLEARED: &str = super::TEAL;
    pub const POSITIVE: &str = super::VERMILLION;
}

/// Tests-vs-detections comparison colors.
pub mod comparison {
    pub const TESTS: &str = super::BLUE;
    pub const DETECTIONS: &str = super::VERMILLION;
    pub const RATE: &str = super::TEAL;
}
