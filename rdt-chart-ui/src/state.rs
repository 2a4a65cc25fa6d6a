//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use rdt_charts::views::geography::MapMode;
use rdt_charts::DataBundle;
use rdt_core::DrugType;
use rdt_data::filter::{Filters, JurisdictionFilter};

/// Shared state for the RDT dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading data sources
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// The loaded, normalized datasets
    pub bundle: Signal<DataBundle>,
    /// Year range selection
    pub year_start: Signal<i32>,
    pub year_end: Signal<i32>,
    /// Bounds of the year sliders, derived from the loaded data
    pub min_year: Signal<i32>,
    pub max_year: Signal<i32>,
    /// Jurisdiction selection
    pub jurisdiction: Signal<JurisdictionFilter>,
    /// Selected drug types
    pub drug_types: Signal<Vec<DrugType>>,
    /// Trend chart view: "area" or "line"
    pub trend_view: Signal<String>,
    /// Choropleth view mode
    pub map_mode: Signal<MapMode>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            bundle: Signal::new(DataBundle::new()),
            year_start: Signal::new(2008),
            year_end: Signal::new(2024),
            min_year: Signal::new(2008),
            max_year: Signal::new(2024),
            jurisdiction: Signal::new(JurisdictionFilter::All),
            drug_types: Signal::new(DrugType::ALL.to_vec()),
            trend_view: Signal::new("area".to_string()),
            map_mode: Signal::new(MapMode::Detections),
        }
    }

    /// Snapshot the filter signals, swapping inverted year bounds.
    pub fn filters(&self) -> Filters {
        let mut start = (self.year_start)();
        let mut end = (self.year_end)();
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        Filters {
            year_start: start,
            year_end: end,
            jurisdiction: (self.jurisdiction)(),
            drug_types: (self.drug_types)(),
        }
    }

    /// Restore the defaults: the loaded dataset's full year span, all
    /// jurisdictions, every drug type.
    pub fn reset_filters(&mut self) {
        let min = (self.min_year)();
        let max = (self.max_year)();
        self.year_start.set(min);
        self.year_end.set(max);
        self.jurisdiction.set(JurisdictionFilter::All);
        self.drug_types.set(DrugType::ALL.to_vec());
    }
}
