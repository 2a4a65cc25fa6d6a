//! Choropleth map and jurisdiction comparison bars.

use crate::DataBundle;
use rdt_data::aggregate::{numeric, sum_by};
use rdt_data::filter::{self, Filters, JurisdictionFilter};
use serde::Serialize;

/// Detections summed per jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JurisdictionTotal {
    pub jurisdiction: String,
    pub total: f64,
}

/// Sum detections per jurisdiction over the filtered year range. The map
/// and comparison bars always show every state, so the jurisdiction
/// selection is deliberately ignored here.
pub fn jurisdiction_totals(bundle: &DataBundle, filters: &Filters) -> Vec<JurisdictionTotal> {
    let all_states = Filters {
        jurisdiction: JurisdictionFilter::All,
        ..filters.clone()
    };
    let filtered = filter::apply(&bundle.jurisdiction, &all_states);
    sum_by(&filtered, &["jurisdiction"], "total")
        .into_iter()
        .map(|g| JurisdictionTotal {
            jurisdiction: g.key_str(0).to_string(),
            total: g.sum,
        })
        .collect()
}

/// What the choropleth encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    Detections,
    Tests,
    PositiveRate,
}

impl MapMode {
    pub fn legend_label(&self) -> &'static str {
        match self {
            MapMode::Detections => "Positive Detections",
            MapMode::Tests => "Tests Conducted",
            MapMode::PositiveRate => "Positive Rate %",
        }
    }
}

/// One jurisdiction's value on the map. `has_data` is false when the value
/// cannot be derived (a rate without valid test counts); the renderer shows
/// a hatched "no data" fill for those.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDatum {
    pub jurisdiction: String,
    pub value: f64,
    pub has_data: bool,
    /// Detections per 100,000 residents (latest in-range population year).
    pub per_100k: Option<f64>,
}

/// Build the map payload for the given view mode.
pub fn map_view(bundle: &DataBundle, filters: &Filters, mode: MapMode) -> Vec<MapDatum> {
    let detections = jurisdiction_totals(bundle, filters);
    let tests = tests_by_jurisdiction(bundle, filters);

    detections
        .into_iter()
        .map(|d| {
            let per_100k = per_capita(bundle, filters, &d.jurisdiction, d.total);
            let tests_entry = tests.iter().find(|t| t.jurisdiction == d.jurisdiction);
            let tests_total = tests_entry.map(|t| t.total).unwrap_or(0.0);
            match mode {
                MapMode::Detections => MapDatum {
                    jurisdiction: d.jurisdiction,
                    value: d.total,
                    has_data: true,
                    per_100k,
                },
                // Presence decides has_data: a measured zero-test year is
                // data, a jurisdiction missing from the export is not.
                MapMode::Tests => MapDatum {
                    jurisdiction: d.jurisdiction,
                    value: tests_total,
                    has_data: tests_entry.is_some(),
                    per_100k,
                },
                MapMode::PositiveRate => {
                    // A rate only makes sense with valid test counts at
                    // least as large as the detections they produced.
                    if tests_total > 0.0 && tests_total >= d.total {
                        MapDatum {
                            jurisdiction: d.jurisdiction,
                            value: d.total / tests_total * 100.0,
                            has_data: true,
                            per_100k,
                        }
                    } else {
                        MapDatum {
                            jurisdiction: d.jurisdiction,
                            value: 0.0,
                            has_data: false,
                            per_100k,
                        }
                    }
                }
            }
        })
        .collect()
}

/// Tests conducted per jurisdiction over the filtered year range.
pub fn tests_by_jurisdiction(bundle: &DataBundle, filters: &Filters) -> Vec<JurisdictionTotal> {
    let all_states = Filters {
        jurisdiction: JurisdictionFilter::All,
        ..filters.clone()
    };
    let filtered = filter::apply(&bundle.tests_conducted, &all_states);
    sum_by(&filtered, &["jurisdiction"], "tests_conducted")
        .into_iter()
        .map(|g| JurisdictionTotal {
            jurisdiction: g.key_str(0).to_string(),
            total: g.sum,
        })
        .collect()
}

/// Detections per 100k residents, using the latest in-range population
/// observation for the jurisdiction. `None` when no population data.
fn per_capita(
    bundle: &DataBundle,
    filters: &Filters,
    jurisdiction: &str,
    detections: f64,
) -> Option<f64> {
    let population = bundle
        .population
        .iter()
        .filter(|r| {
            filters.year_in_range(filter::record_year(r))
                && r.get("jurisdiction").and_then(|v| v.as_str()) == Some(jurisdiction)
        })
        .max_by_key(|r| filter::record_year(r))
        .map(|r| numeric(r, "population"))?;
    if population > 0.0 {
        Some(detections / population * 100_000.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use serde_json::json;

    fn bundle() -> DataBundle {
        let mut b = DataBundle::new();
        b.insert_raw(
            Source::Jurisdiction,
            Some(json!([
                {"year": 2022, "jurisdiction": "NSW", "count": 100},
                {"year": 2023, "jurisdiction": "NSW", "count": 50},
                {"year": 2022, "jurisdiction": "VIC", "count": 30}
            ])),
        );
        b.insert_raw(
            Source::TestsConducted,
            Some(json!([
                {"year": 2022, "jurisdiction": "NSW", "tests_conducted": 1000},
                {"year": 2023, "jurisdiction": "NSW", "tests_conducted": 500}
            ])),
        );
        b.insert_raw(
            Source::Population,
            Some(json!([
                {"year": 2022, "jurisdiction": "NSW", "population": 8000000},
                {"year": 2023, "jurisdiction": "NSW", "population": 8200000}
            ])),
        );
        b
    }

    #[test]
    fn test_jurisdiction_totals_ignore_jurisdiction_filter() {
        let filters = Filters {
            jurisdiction: JurisdictionFilter::One(rdt_core::Jurisdiction::NSW),
            ..Filters::defaults()
        };
        let totals = jurisdiction_totals(&bundle(), &filters);
        assert_eq!(totals.len(), 2);
        let nsw = totals.iter().find(|t| t.jurisdiction == "NSW").unwrap();
        assert_eq!(nsw.total, 150.0);
    }

    #[test]
    fn test_rate_mode_guards_invalid_tests() {
        let data = map_view(&bundle(), &Filters::defaults(), MapMode::PositiveRate);
        let nsw = data.iter().find(|d| d.jurisdiction == "NSW").unwrap();
        assert!(nsw.has_data);
        assert_eq!(nsw.value, 10.0); // 150 / 1500 * 100

        // VIC has detections but no test data: flagged rather than divided.
        let vic = data.iter().find(|d| d.jurisdiction == "VIC").unwrap();
        assert!(!vic.has_data);
        assert_eq!(vic.value, 0.0);
    }

    #[test]
    fn test_per_capita_uses_latest_population() {
        let data = map_view(&bundle(), &Filters::defaults(), MapMode::Detections);
        let nsw = data.iter().find(|d| d.jurisdiction == "NSW").unwrap();
        // 150 detections / 8.2M residents * 100k
        let expected = 150.0 / 8_200_000.0 * 100_000.0;
        assert!((nsw.per_100k.unwrap() - expected).abs() < 1e-9);
        let vic = data.iter().find(|d| d.jurisdiction == "VIC").unwrap();
        assert!(vic.per_100k.is_none());
    }

    #[test]
    fn test_tests_mode() {
        let data = map_view(&bundle(), &Filters::defaults(), MapMode::Tests);
        let nsw = data.iter().find(|d| d.jurisdiction == "NSW").unwrap();
        assert_eq!(nsw.value, 1500.0);
        let vic = data.iter().find(|d| d.jurisdiction == "VIC").unwrap();
        assert!(!vic.has_data);
    }

    #[test]
    fn test_tests_mode_measured_zero_is_data() {
        let mut b = bundle();
        // VIC ran a program but recorded zero tests that year: that is a
        // measurement, not a gap.
        b.insert_raw(
            Source::TestsConducted,
            Some(json!([
                {"year": 2022, "jurisdiction": "NSW", "tests_conducted": 1000},
                {"year": 2022, "jurisdiction": "VIC", "tests_conducted": 0}
            ])),
        );
        let data = map_view(&b, &Filters::defaults(), MapMode::Tests);
        let vic = data.iter().find(|d| d.jurisdiction == "VIC").unwrap();
        assert!(vic.has_data);
        assert_eq!(vic.value, 0.0);
    }
}
