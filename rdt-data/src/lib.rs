//! Normalization and aggregation pipeline for RDT datasets.
//!
//! The data exports behind the dashboard come from several generations of
//! processing pipelines with inconsistent field names and casing. This
//! crate turns those raw JSON arrays into canonical records and sums them
//! into the shapes the charts consume:
//!
//! raw JSON -> [`resolve`] (field aliases) -> [`normalize`] (schema, type
//! coercion, defaults) -> canonical records -> [`aggregate`] (group-by/sum,
//! re-run on every [`filter`] change).

pub mod aggregate;
pub mod filter;
pub mod normalize;
pub mod resolve;

/// A data row: string keys to JSON values. Raw records have arbitrary keys;
/// canonical records (the output of [`normalize::normalize_dataset`]) carry
/// every schema-declared field.
pub type Record = serde_json::Map<String, serde_json::Value>;
