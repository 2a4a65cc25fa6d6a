//! Drug composition views: stacked bars, heatmap matrix, slope chart.

use crate::DataBundle;
use rdt_data::aggregate::sum_matrix;
use rdt_data::filter::{self, Filters};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One stacked bar: a jurisdiction with its per-drug counts flattened into
/// the row, the shape the D3 stack layout consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedRow {
    pub jurisdiction: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, f64>,
}

impl StackedRow {
    /// Sum across all drug types in this row.
    pub fn total(&self) -> f64 {
        self.counts.values().sum()
    }
}

/// Jurisdiction-by-drug-type stacked rows. Year range and drug selection
/// apply; the jurisdiction filter does not (the chart compares all states).
pub fn stacked_rows(bundle: &DataBundle, filters: &Filters) -> Vec<StackedRow> {
    let filtered: Vec<_> = bundle
        .drug_composition
        .iter()
        .filter(|r| {
            filters.year_in_range(filter::record_year(r))
                && filters.matches_drug(drug_name(r))
        })
        .cloned()
        .collect();

    let matrix = sum_matrix(&filtered, "jurisdiction", "drug_type", "count");
    matrix
        .rows
        .iter()
        .map(|row| {
            let mut counts = BTreeMap::new();
            for col in &matrix.cols {
                if let Some(sum) = matrix.value(row, col) {
                    counts.insert(col.as_str().unwrap_or("").to_string(), sum);
                }
            }
            StackedRow {
                jurisdiction: row.as_str().unwrap_or("").to_string(),
                counts,
            }
        })
        .collect()
}

/// One cell of the jurisdiction-by-drug-type heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub jurisdiction: String,
    pub drug_type: String,
    pub value: f64,
}

/// Heatmap cells over the filtered year range. Combinations without source
/// rows are omitted (the renderer paints them as "no data"); zero-bearing
/// records produce a cell with value 0.
pub fn heatmap_cells(bundle: &DataBundle, filters: &Filters) -> Vec<HeatmapCell> {
    let filtered: Vec<_> = bundle
        .drug_composition
        .iter()
        .filter(|r| filters.year_in_range(filter::record_year(r)))
        .cloned()
        .collect();

    sum_matrix(&filtered, "jurisdiction", "drug_type", "count")
        .cells()
        .iter()
        .map(|c| HeatmapCell {
            jurisdiction: c.row.as_str().unwrap_or("").to_string(),
            drug_type: c.col.as_str().unwrap_or("").to_string(),
            value: c.sum,
        })
        .collect()
}

/// A per-year value within one drug's slope series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// One drug's time series across the filtered year span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlopeSeries {
    pub drug_type: String,
    pub values: Vec<YearValue>,
    pub start_value: f64,
    pub end_value: f64,
    pub start_year: i32,
    pub end_year: i32,
}

/// Year-by-year series per drug type from the drug-trend export. Years with
/// no record for a drug are filled with zero so every series spans the same
/// x-domain.
pub fn slope_series(bundle: &DataBundle, filters: &Filters) -> Vec<SlopeSeries> {
    let filtered: Vec<_> = bundle
        .drug_trend
        .iter()
        .filter(|r| filters.year_in_range(filter::record_year(r)))
        .cloned()
        .collect();

    let matrix = sum_matrix(&filtered, "drug_type", "year", "count");
    let mut years: Vec<i32> = matrix
        .cols
        .iter()
        .filter_map(Value::as_i64)
        .map(|y| y as i32)
        .collect();
    years.sort_unstable();
    if years.is_empty() {
        return Vec::new();
    }

    matrix
        .rows
        .iter()
        .map(|drug| {
            let values: Vec<YearValue> = years
                .iter()
                .map(|year| YearValue {
                    year: *year,
                    value: matrix.value(drug, &Value::from(*year)).unwrap_or(0.0),
                })
                .collect();
            let start_value = values.first().map(|v| v.value).unwrap_or(0.0);
            let end_value = values.last().map(|v| v.value).unwrap_or(0.0);
            SlopeSeries {
                drug_type: drug.as_str().unwrap_or("").to_string(),
                values,
                start_value,
                end_value,
                start_year: years[0],
                end_year: years[years.len() - 1],
            }
        })
        .collect()
}

fn drug_name(record: &rdt_data::Record) -> &str {
    record
        .get("drug_type")
        .and_then(Value::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use rdt_core::DrugType;
    use serde_json::json;

    fn bundle() -> DataBundle {
        let mut b = DataBundle::new();
        b.insert_raw(
            Source::DrugComposition,
            Some(json!([
                {"jurisdiction": "NSW", "DRUG": "CANNABIS", "count": 10},
                {"jurisdiction": "NSW", "DRUG": "CANNABIS", "count": 5},
                {"jurisdiction": "NSW", "DRUG": "COCAINE", "count": 3},
                {"jurisdiction": "TAS", "DRUG": "UNKNOWN", "count": 0}
            ])),
        );
        b.insert_raw(
            Source::DrugTrend,
            Some(json!([
                {"year": 2020, "DRUG": "CANNABIS", "count": 10},
                {"year": 2022, "DRUG": "CANNABIS", "count": 30},
                {"year": 2022, "DRUG": "COCAINE", "count": 7}
            ])),
        );
        b
    }

    #[test]
    fn test_stacked_rows_aggregate_and_filter_drugs() {
        let rows = stacked_rows(&bundle(), &Filters::defaults());
        let nsw = rows.iter().find(|r| r.jurisdiction == "NSW").unwrap();
        assert_eq!(nsw.counts["Cannabis"], 15.0);
        assert_eq!(nsw.counts["Cocaine"], 3.0);

        let cannabis_only = Filters {
            drug_types: vec![DrugType::Cannabis],
            ..Filters::defaults()
        };
        let rows = stacked_rows(&bundle(), &cannabis_only);
        let nsw = rows.iter().find(|r| r.jurisdiction == "NSW").unwrap();
        assert!(!nsw.counts.contains_key("Cocaine"));
        assert_eq!(nsw.total(), 15.0);
    }

    #[test]
    fn test_heatmap_keeps_measured_zero_omits_absent() {
        let cells = heatmap_cells(&bundle(), &Filters::defaults());
        let tas_unknown = cells
            .iter()
            .find(|c| c.jurisdiction == "TAS" && c.drug_type == "Unknown")
            .unwrap();
        assert_eq!(tas_unknown.value, 0.0);
        assert!(!cells
            .iter()
            .any(|c| c.jurisdiction == "TAS" && c.drug_type == "Cannabis"));
    }

    #[test]
    fn test_slope_series_zero_fills_missing_years() {
        let series = slope_series(&bundle(), &Filters::defaults());
        let cocaine = series.iter().find(|s| s.drug_type == "Cocaine").unwrap();
        assert_eq!(cocaine.start_year, 2020);
        assert_eq!(cocaine.end_year, 2022);
        // No 2020 cocaine record: zero-filled, not NaN and not skipped.
        assert_eq!(cocaine.values[0].value, 0.0);
        assert_eq!(cocaine.end_value, 7.0);

        let cannabis = series.iter().find(|s| s.drug_type == "Cannabis").unwrap();
        assert_eq!(cannabis.start_value, 10.0);
        assert_eq!(cannabis.end_value, 30.0);
    }

    #[test]
    fn test_slope_series_keeps_float_typed_years() {
        // Some export generations emit years as floats (2020.0). The
        // normalizer canonicalizes them to integers; the year must survive
        // into the series instead of silently dropping out.
        let mut b = DataBundle::new();
        b.insert_raw(
            Source::DrugTrend,
            Some(json!([
                {"year": 2020.0, "DRUG": "CANNABIS", "count": 5},
                {"year": 2021, "DRUG": "CANNABIS", "count": 9}
            ])),
        );
        let series = slope_series(&b, &Filters::defaults());
        let cannabis = series.iter().find(|s| s.drug_type == "Cannabis").unwrap();
        assert_eq!(cannabis.values.len(), 2);
        assert_eq!(cannabis.start_year, 2020);
        assert_eq!(cannabis.start_value, 5.0);
        assert_eq!(cannabis.end_value, 9.0);
    }

    #[test]
    fn test_slope_series_empty_range() {
        let filters = Filters {
            year_start: 1990,
            year_end: 1991,
            ..Filters::defaults()
        };
        assert!(slope_series(&bundle(), &filters).is_empty());
    }
}
