//! Field resolver: maps heterogeneous raw field names to canonical fields.
//!
//! Different export generations emit `YEAR`, `year` or `Year` for the same
//! column. Resolution probes a priority-ordered alias list and returns the
//! first key that is *present* in the record. Presence is the only test: a
//! value of `0`, `false`, `""` or JSON `null` counts as found. (An earlier
//! truthiness check silently skipped zero counts in favor of defaults.)

use crate::Record;
use serde_json::Value;

/// Known historical export spellings for each canonical field, in priority
/// order. Fields without an entry resolve by their own name only.
pub fn default_aliases(field: &str) -> &'static [&'static str] {
    match field {
        "year" => &["YEAR", "year", "Year"],
        "count" => &["COUNT", "count", "total", "TOTAL", "value"],
        "jurisdiction" => &["JURISDICTION", "jurisdiction", "Jurisdiction", "state", "STATE"],
        "drug_type" => &["DRUG", "drug_type", "Drug_Type", "drugType", "drug"],
        "tests_conducted" => &["tests_conducted", "TESTS_CONDUCTED", "testsCount"],
        "positive_detections" => &["positive_detections", "POSITIVE_DETECTIONS", "positive"],
        "cleared" => &["cleared", "CLEARED"],
        "positive_rate" => &["positive_rate", "POSITIVE_RATE"],
        "population" => &["population", "POPULATION"],
        "age_group" => &["AGE_GROUP", "age_group", "ageGroup"],
        "location" => &["LOCATION", "location"],
        _ => &[],
    }
}

/// Resolve `field` in `record`, probing `custom` aliases when given,
/// otherwise the default alias table, otherwise the field's own name.
///
/// Returns `None` only when no alias key exists in the record at all.
pub fn resolve_field<'a>(
    record: &'a Record,
    field: &str,
    custom: Option<&[String]>,
) -> Option<&'a Value> {
    if let Some(aliases) = custom {
        return aliases.iter().find_map(|key| record.get(key.as_str()));
    }
    let defaults = default_aliases(field);
    if defaults.is_empty() {
        return record.get(field);
    }
    defaults.iter().find_map(|key| record.get(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn test_resolves_first_alias_in_priority_order() {
        let rec = record(json!({"YEAR": 2020, "year": 1999}));
        assert_eq!(resolve_field(&rec, "year", None), Some(&json!(2020)));
    }

    #[test]
    fn test_zero_and_falsy_values_count_as_present() {
        // The zero-vs-undefined regression guard: 0 must not be skipped.
        let rec = record(json!({"COUNT": 0}));
        assert_eq!(resolve_field(&rec, "count", None), Some(&json!(0)));

        let rec = record(json!({"jurisdiction": ""}));
        assert_eq!(resolve_field(&rec, "jurisdiction", None), Some(&json!("")));

        let rec = record(json!({"cleared": null}));
        assert_eq!(resolve_field(&rec, "cleared", None), Some(&Value::Null));
    }

    #[test]
    fn test_custom_aliases_override_table() {
        let rec = record(json!({"TOTAL_DETECTIONS": 7, "count": 3}));
        let custom = vec!["TOTAL_DETECTIONS".to_string()];
        assert_eq!(
            resolve_field(&rec, "count", Some(&custom)),
            Some(&json!(7))
        );
    }

    #[test]
    fn test_unknown_field_falls_back_to_own_name() {
        let rec = record(json!({"region": "Hunter"}));
        assert_eq!(resolve_field(&rec, "region", None), Some(&json!("Hunter")));
    }

    #[test]
    fn test_absence_of_all_aliases_is_none() {
        let rec = record(json!({"unrelated": 1}));
        assert_eq!(resolve_field(&rec, "year", None), None);
    }
}
