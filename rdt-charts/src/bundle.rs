//! The loaded, normalized data bundle behind the dashboard.
//!
//! Sources are fetched once at startup. A source that fails to load or
//! parse degrades to an empty dataset; its dependent charts render a
//! "no data" placeholder while the rest of the dashboard keeps working.

use crate::schemas;
use rdt_data::normalize::normalize_dataset;
use rdt_data::Record;
use serde_json::Value;

/// One of the dashboard's data exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Trend,
    Jurisdiction,
    DrugComposition,
    DrugTrend,
    TestsConducted,
    TestsSummary,
    Population,
    GeoJson,
}

impl Source {
    pub const ALL: [Source; 8] = [
        Source::Trend,
        Source::Jurisdiction,
        Source::DrugComposition,
        Source::DrugTrend,
        Source::TestsConducted,
        Source::TestsSummary,
        Source::Population,
        Source::GeoJson,
    ];

    /// Path of the export file relative to the data root.
    pub fn path(&self) -> &'static str {
        match self {
            Source::Trend => "data/trend.json",
            Source::Jurisdiction => "data/jurisdiction.json",
            Source::DrugComposition => "data/drug_by_jurisdiction.json",
            Source::DrugTrend => "data/drug_trend.json",
            Source::TestsConducted => "data/tests_conducted.json",
            Source::TestsSummary => "data/tests_summary.json",
            Source::Population => "data/population.json",
            Source::GeoJson => "australian-states.geojson",
        }
    }
}

/// All normalized datasets plus the (render-only) GeoJSON.
#[derive(Debug, Clone, Default)]
pub struct DataBundle {
    pub trend: Vec<Record>,
    pub jurisdiction: Vec<Record>,
    pub drug_composition: Vec<Record>,
    pub drug_trend: Vec<Record>,
    pub tests_conducted: Vec<Record>,
    pub tests_summary: Vec<Record>,
    pub population: Vec<Record>,
    pub geo_json: Option<Value>,
}

impl DataBundle {
    pub fn new() -> Self {
        DataBundle::default()
    }

    /// Normalize one raw source into the bundle. `None` (load failure)
    /// leaves the empty dataset in place.
    pub fn insert_raw(&mut self, source: Source, raw: Option<Value>) {
        let Some(raw) = raw else {
            log::warn!("source {:?} unavailable, charts degrade to no-data", source);
            return;
        };
        match source {
            Source::Trend => self.trend = normalize_dataset(&raw, &schemas::trend()),
            Source::Jurisdiction => {
                self.jurisdiction = normalize_dataset(&raw, &schemas::jurisdiction())
            }
            Source::DrugComposition => {
                self.drug_composition = normalize_dataset(&raw, &schemas::drug_composition())
            }
            Source::DrugTrend => {
                self.drug_trend = normalize_dataset(&raw, &schemas::drug_trend())
            }
            Source::TestsConducted => {
                self.tests_conducted = normalize_dataset(&raw, &schemas::tests_conducted())
            }
            Source::TestsSummary => {
                self.tests_summary = normalize_dataset(&raw, &schemas::tests_summary())
            }
            Source::Population => {
                self.population = normalize_dataset(&raw, &schemas::population())
            }
            Source::GeoJson => self.geo_json = Some(raw),
        }
    }

    /// The year span present in the trend data, for initializing the
    /// year-range filter to the dataset's actual extent.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let years: Vec<i32> = self
            .trend
            .iter()
            .map(rdt_data::filter::record_year)
            .filter(|y| *y > 0)
            .collect();
        let min = years.iter().min()?;
        let max = years.iter().max()?;
        Some((*min, *max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_source_stays_empty() {
        let mut bundle = DataBundle::new();
        bundle.insert_raw(Source::Trend, None);
        assert!(bundle.trend.is_empty());
    }

    #[test]
    fn test_insert_normalizes() {
        let mut bundle = DataBundle::new();
        bundle.insert_raw(
            Source::Trend,
            Some(json!([{"YEAR": "2019", "COUNT": "42"}])),
        );
        assert_eq!(bundle.trend.len(), 1);
        assert_eq!(bundle.trend[0]["total"], json!(42));
    }

    #[test]
    fn test_year_span() {
        let mut bundle = DataBundle::new();
        bundle.insert_raw(
            Source::Trend,
            Some(json!([
                {"year": 2012, "count": 1},
                {"year": 2008, "count": 1},
                {"year": 2024, "count": 1}
            ])),
        );
        assert_eq!(bundle.year_span(), Some((2008, 2024)));
        assert_eq!(DataBundle::new().year_span(), None);
    }
}
