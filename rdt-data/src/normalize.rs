//! Dataset normalizer: per-field schemas with alias resolution, type
//! coercion and defaults.
//!
//! A [`Schema`] declares each output field once, as either an alias-based
//! [`Resolve`] rule or a whole-record transform. [`normalize_dataset`]
//! applies the schema to every element of a raw JSON array, producing
//! canonical records of equal length and matching order. It never fails:
//! non-array input yields an empty vec and malformed fields fall back to
//! their declared defaults.

use crate::resolve::resolve_field;
use crate::Record;
use serde_json::Value;

/// Type coercion applied to a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Keep the value as-is; absent fields become the default, else null.
    #[default]
    None,
    /// Coerce to a number; absent or unparseable values become the default,
    /// else 0. Integral results stay JSON integers.
    Number,
}

/// A whole-record transform. Takes the raw record, returns the canonical
/// value, bypassing alias resolution entirely.
pub type Transform = fn(&Record) -> Value;

/// Alias-based resolution rule for one output field.
#[derive(Debug, Clone, Default)]
pub struct Resolve {
    /// Source field name; defaults to the output field's own name.
    pub from: Option<String>,
    /// Custom alias list, overriding the default alias table.
    pub aliases: Option<Vec<String>>,
    pub coercion: Coercion,
    /// Fallback when no alias is present (or coercion fails).
    pub default: Option<Value>,
}

impl Resolve {
    /// Pass the resolved value through unchanged.
    pub fn value() -> Self {
        Resolve::default()
    }

    /// Coerce the resolved value to a number.
    pub fn number() -> Self {
        Resolve {
            coercion: Coercion::Number,
            ..Resolve::default()
        }
    }

    /// Resolve from a different source field than the output name.
    pub fn from(mut self, source: &str) -> Self {
        self.from = Some(source.to_string());
        self
    }

    /// Probe these aliases instead of the default alias table.
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = Some(aliases.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Fallback value when the field is missing from the record.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// How one output field is produced. Exactly one resolution path applies.
#[derive(Clone)]
pub enum FieldRule {
    Resolve(Resolve),
    Transform(Transform),
}

impl From<Resolve> for FieldRule {
    fn from(rule: Resolve) -> Self {
        FieldRule::Resolve(rule)
    }
}

/// Ordered per-field schema for one data source.
#[derive(Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldRule)>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    /// Declare an output field with an alias-based rule.
    pub fn field(mut self, name: &str, rule: impl Into<FieldRule>) -> Self {
        self.fields.push((name.to_string(), rule.into()));
        self
    }

    /// Declare an output field computed from the whole raw record.
    pub fn transform(mut self, name: &str, f: Transform) -> Self {
        self.fields.push((name.to_string(), FieldRule::Transform(f)));
        self
    }

    pub fn fields(&self) -> &[(String, FieldRule)] {
        &self.fields
    }
}

/// Apply `schema` to a raw JSON array, producing canonical records.
///
/// Output length equals input length and order is preserved, so positions
/// correspond to the raw array for tracing. Non-array input (null, object,
/// scalar) yields an empty vec. Input is never mutated.
pub fn normalize_dataset(data: &Value, schema: &Schema) -> Vec<Record> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };

    let empty = Record::new();
    items
        .iter()
        .map(|item| {
            // Non-object rows have no fields to resolve; every output field
            // falls back to its default.
            let raw = item.as_object().unwrap_or(&empty);
            normalize_record(raw, schema)
        })
        .collect()
}

fn normalize_record(raw: &Record, schema: &Schema) -> Record {
    let mut out = Record::new();
    for (name, rule) in schema.fields() {
        let value = match rule {
            FieldRule::Transform(f) => f(raw),
            FieldRule::Resolve(resolve) => {
                let source = resolve.from.as_deref().unwrap_or(name);
                let found = resolve_field(raw, source, resolve.aliases.as_deref());
                match resolve.coercion {
                    Coercion::Number => coerce_number(found, resolve.default.as_ref()),
                    Coercion::None => match found {
                        Some(Value::Null) | None => {
                            resolve.default.clone().unwrap_or(Value::Null)
                        }
                        Some(v) => v.clone(),
                    },
                }
            }
        };
        out.insert(name.clone(), value);
    }
    out
}

/// Numeric coercion. Missing, null and unparseable values all fall back to
/// the default (else 0) so downstream sums never see NaN.
fn coerce_number(found: Option<&Value>, default: Option<&Value>) -> Value {
    let fallback = || {
        default
            .and_then(Value::as_f64)
            .map(json_number)
            .unwrap_or_else(|| Value::from(0))
    };
    match found {
        // Through json_number so an integral float like 2020.0 lands as the
        // integer 2020, same as string inputs.
        Some(Value::Number(n)) => json_number(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => json_number(f),
            _ => fallback(),
        },
        Some(Value::Bool(b)) => Value::from(*b as i64),
        _ => fallback(),
    }
}

/// Emit integral floats as JSON integers ("2020", not "2020.0").
fn json_number(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Value::from(f)
    }
}
