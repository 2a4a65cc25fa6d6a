//! Aggregator: group canonical records by key fields and sum a numeric
//! field.
//!
//! One generic rollup replaces the per-chart ad hoc group-by blocks. Every
//! distinct key combination observed in the input appears exactly once, in
//! first-observed order, with an exact sum. Ordering beyond that is a
//! caller concern (e.g. "sorted descending by total" for bar charts).
//! Missing or non-numeric value fields contribute zero, never NaN.

use crate::Record;
use serde_json::Value;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Group `items` by `key` and sum `value` per group, preserving
/// first-observed key order.
pub fn sum_rollup<T, K, I>(
    items: I,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
{
    let mut groups: Vec<(K, f64)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();
    for item in items {
        let k = key(&item);
        let v = value(&item);
        match index.get(&k) {
            Some(&i) => groups[i].1 += v,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, v));
            }
        }
    }
    groups
}

/// Read a numeric field from a record; missing or non-numeric is 0.
pub fn numeric(record: &Record, field: &str) -> f64 {
    match record.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The sum of a numeric field across all records sharing a key tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSum {
    /// Key values, in `key_fields` order.
    pub keys: Vec<Value>,
    pub sum: f64,
}

impl GroupSum {
    /// Key value at position `i`, as a string ("" when absent/non-string).
    pub fn key_str(&self, i: usize) -> &str {
        self.keys.get(i).and_then(Value::as_str).unwrap_or("")
    }
}

/// Group `records` by one or more key fields, summing `value_field`.
/// Empty input produces an empty result set.
pub fn sum_by(records: &[Record], key_fields: &[&str], value_field: &str) -> Vec<GroupSum> {
    sum_rollup(
        records,
        |r| CompositeKey::new(r, key_fields),
        |r| numeric(r, value_field),
    )
    .into_iter()
    .map(|(key, sum)| GroupSum { keys: key.keys, sum })
    .collect()
}

/// Key tuple for record-oriented rollups. `serde_json::Value` does not
/// implement `Hash`, so identity lives in the rendered form: values of
/// different JSON types stay distinct (`"2020"` vs `2020`).
#[derive(Debug, Clone)]
struct CompositeKey {
    rendered: String,
    keys: Vec<Value>,
}

impl CompositeKey {
    fn new(record: &Record, key_fields: &[&str]) -> Self {
        let keys: Vec<Value> = key_fields
            .iter()
            .map(|f| record.get(*f).cloned().unwrap_or(Value::Null))
            .collect();
        let rendered = keys
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join("\u{1f}");
        CompositeKey { rendered, keys }
    }
}

impl PartialEq for CompositeKey {
    fn eq(&self, other: &Self) -> bool {
        self.rendered == other.rendered
    }
}

impl Eq for CompositeKey {}

impl Hash for CompositeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rendered.hash(state);
    }
}

/// Two-level grouping result, addressable by both keys.
///
/// A (row, col) combination with no contributing records is *absent*:
/// [`MatrixSum::value`] returns `None` for it, while a combination backed
/// only by zero-valued records returns `Some(0.0)`. Consumers that need the
/// "no data" vs "measured zero" distinction use `value`; others iterate
/// [`MatrixSum::cells`].
#[derive(Debug, Clone, Default)]
pub struct MatrixSum {
    /// Distinct row keys, first-observed order.
    pub rows: Vec<Value>,
    /// Distinct column keys, first-observed order.
    pub cols: Vec<Value>,
    cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    pub row: Value,
    pub col: Value,
    pub sum: f64,
}

impl MatrixSum {
    /// All observed (row, col) sums.
    pub fn cells(&self) -> &[MatrixCell] {
        &self.cells
    }

    /// Sum for one combination, or `None` when no record contributed to it.
    pub fn value(&self, row: &Value, col: &Value) -> Option<f64> {
        self.cells
            .iter()
            .find(|c| &c.row == row && &c.col == col)
            .map(|c| c.sum)
    }

    /// Total across all cells.
    pub fn total(&self) -> f64 {
        self.cells.iter().map(|c| c.sum).sum()
    }
}

/// Group `records` by (`row_field`, `col_field`), summing `value_field`.
pub fn sum_matrix(
    records: &[Record],
    row_field: &str,
    col_field: &str,
    value_field: &str,
) -> MatrixSum {
    let groups = sum_by(records, &[row_field, col_field], value_field);
    let mut matrix = MatrixSum::default();
    for group in groups {
        let row = group.keys[0].clone();
        let col = group.keys[1].clone();
        if !matrix.rows.contains(&row) {
            matrix.rows.push(row.clone());
        }
        if !matrix.cols.contains(&col) {
            matrix.cols.push(col.clone());
        }
        matrix.cells.push(MatrixCell {
            row,
            col,
            sum: group.sum,
        });
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: serde_json::Value) -> Vec<Record> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_two_key_grouping_sums() {
        // Scenario C
        let recs = records(json!([
            {"jurisdiction": "NSW", "drug_type": "Cannabis", "count": 10},
            {"jurisdiction": "NSW", "drug_type": "Cannabis", "count": 5}
        ]));
        let out = sum_by(&recs, &["jurisdiction", "drug_type"], "count");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].keys, vec![json!("NSW"), json!("Cannabis")]);
        assert_eq!(out[0].sum, 15.0);
    }

    #[test]
    fn test_total_conserved_across_regrouping() {
        let recs = records(json!([
            {"jurisdiction": "NSW", "year": 2020, "count": 3},
            {"jurisdiction": "VIC", "year": 2020, "count": 4},
            {"jurisdiction": "NSW", "year": 2021, "count": 5}
        ]));
        let input_total: f64 = recs.iter().map(|r| numeric(r, "count")).sum();
        let by_year: f64 = sum_by(&recs, &["year"], "count")
            .iter()
            .map(|g| g.sum)
            .sum();
        let by_jurisdiction: f64 = sum_by(&recs, &["jurisdiction"], "count")
            .iter()
            .map(|g| g.sum)
            .sum();
        assert_eq!(by_year, input_total);
        assert_eq!(by_jurisdiction, input_total);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let recs = records(json!([
            {"jurisdiction": "NSW", "count": 1},
            {"jurisdiction": "VIC", "count": 2}
        ]));
        let snapshot = recs.clone();
        let first = sum_by(&recs, &["jurisdiction"], "count");
        let second = sum_by(&recs, &["jurisdiction"], "count");
        assert_eq!(first, second);
        assert_eq!(recs, snapshot);
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        assert!(sum_by(&[], &["jurisdiction"], "count").is_empty());
        let m = sum_matrix(&[], "a", "b", "count");
        assert!(m.cells().is_empty());
        assert!(m.rows.is_empty());
    }

    #[test]
    fn test_missing_values_contribute_zero() {
        let recs = records(json!([
            {"jurisdiction": "NSW", "count": 10},
            {"jurisdiction": "NSW"},
            {"jurisdiction": "NSW", "count": "not a number"}
        ]));
        let out = sum_by(&recs, &["jurisdiction"], "count");
        assert_eq!(out[0].sum, 10.0);
        assert!(!out[0].sum.is_nan());
    }

    #[test]
    fn test_first_observed_order() {
        let recs = records(json!([
            {"jurisdiction": "WA", "count": 1},
            {"jurisdiction": "ACT", "count": 1},
            {"jurisdiction": "WA", "count": 1}
        ]));
        let out = sum_by(&recs, &["jurisdiction"], "count");
        assert_eq!(out[0].key_str(0), "WA");
        assert_eq!(out[1].key_str(0), "ACT");
    }

    #[test]
    fn test_matrix_distinguishes_absent_from_zero() {
        let recs = records(json!([
            {"jurisdiction": "NSW", "drug_type": "Cannabis", "count": 8},
            {"jurisdiction": "TAS", "drug_type": "Unknown", "count": 0}
        ]));
        let m = sum_matrix(&recs, "jurisdiction", "drug_type", "count");
        // Measured zero: a record exists
        assert_eq!(m.value(&json!("TAS"), &json!("Unknown")), Some(0.0));
        // No data: combination never observed
        assert_eq!(m.value(&json!("TAS"), &json!("Cannabis")), None);
        assert_eq!(m.rows, vec![json!("NSW"), json!("TAS")]);
        assert_eq!(m.total(), 8.0);
    }

    #[test]
    fn test_differently_typed_keys_stay_distinct() {
        // A string "2020" and a number 2020 are different keys, not one
        // bucket; the rendered key identity keeps the JSON type.
        let recs = records(json!([
            {"year": "2020", "count": 1},
            {"year": 2020, "count": 2}
        ]));
        let out = sum_by(&recs, &["year"], "count");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].keys[0], json!("2020"));
        assert_eq!(out[1].keys[0], json!(2020));
    }

    #[test]
    fn test_sum_rollup_with_selectors() {
        let pairs = vec![("a", 1.0), ("b", 2.0), ("a", 3.0)];
        let out = sum_rollup(pairs, |p| p.0, |p| p.1);
        assert_eq!(out, vec![("a", 4.0), ("b", 2.0)]);
    }
}
