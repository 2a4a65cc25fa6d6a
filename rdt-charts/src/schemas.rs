//! One normalization [`Schema`] per data export.
//!
//! The exports come from different pipeline generations: some carry
//! UPPERCASE column names, some camelCase, and the drug-composition file
//! has no year column at all (it is aggregate 2023-2024 data, hence the
//! declared default).

use rdt_core::normalize_drug_type;
use rdt_data::normalize::{Resolve, Schema};
use rdt_data::resolve::resolve_field;
use rdt_data::Record;
use serde_json::Value;

/// Drug-type transform: probe the raw spelling under its aliases and map
/// it to the canonical Title Case name.
fn canonical_drug_type(raw: &Record) -> Value {
    let name = resolve_field(raw, "drug_type", None)
        .and_then(Value::as_str)
        .unwrap_or("");
    Value::from(normalize_drug_type(name))
}

/// Trend-by-year records: `{year, total}`.
pub fn trend() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .field("total", Resolve::number().from("count"))
}

/// Jurisdiction-by-year records: `{year, jurisdiction, total}`.
pub fn jurisdiction() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .field("jurisdiction", Resolve::value())
        .field("total", Resolve::number().from("count"))
}

/// Drug-composition records: `{year, jurisdiction, drug_type, count}`.
/// No year column in the export; defaults to 2024.
pub fn drug_composition() -> Schema {
    Schema::new()
        .field("year", Resolve::number().default_value(2024))
        .field("jurisdiction", Resolve::value())
        .transform("drug_type", canonical_drug_type)
        .field("count", Resolve::number())
}

/// Drug-trend records for the slope chart: `{year, drug_type, count}`.
pub fn drug_trend() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .transform("drug_type", canonical_drug_type)
        .field("count", Resolve::number())
}

/// Tests-conducted records: `{year, jurisdiction, tests_conducted}`.
pub fn tests_conducted() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .field("jurisdiction", Resolve::value())
        .field("tests_conducted", Resolve::number())
}

/// Tests-summary records: `{year, tests_conducted, positive_detections, cleared}`.
pub fn tests_summary() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .field("tests_conducted", Resolve::number())
        .field("positive_detections", Resolve::number())
        .field("cleared", Resolve::number())
}

/// Population records: `{year, jurisdiction, population}`.
pub fn population() -> Schema {
    Schema::new()
        .field("year", Resolve::number())
        .field("jurisdiction", Resolve::value())
        .field("population", Resolve::number())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdt_data::normalize::normalize_dataset;
    use serde_json::json;

    #[test]
    fn test_trend_schema_handles_export_variants() {
        let raw = json!([
            {"YEAR": "2020", "COUNT": "5"},
            {"year": 2021, "total": 7}
        ]);
        let out = normalize_dataset(&raw, &trend());
        assert_eq!(out[0]["year"], json!(2020));
        assert_eq!(out[0]["total"], json!(5));
        assert_eq!(out[1]["total"], json!(7));
    }

    #[test]
    fn test_drug_composition_year_default_and_drug_mapping() {
        let raw = json!([
            {"JURISDICTION": "QLD", "DRUG": "METHYLAMPHETAMINE", "COUNT": 12}
        ]);
        let out = normalize_dataset(&raw, &drug_composition());
        assert_eq!(out[0]["year"], json!(2024));
        assert_eq!(out[0]["jurisdiction"], json!("QLD"));
        assert_eq!(out[0]["drug_type"], json!("Amphetamine"));
        assert_eq!(out[0]["count"], json!(12));
    }

    #[test]
    fn test_tests_summary_schema() {
        let raw = json!([
            {"year": 2022, "tests_conducted": 100, "positive_detections": 10, "cleared": 90}
        ]);
        let out = normalize_dataset(&raw, &tests_summary());
        assert_eq!(out[0]["cleared"], json!(90));
        assert_eq!(out[0]["positive_detections"], json!(10));
    }
}
