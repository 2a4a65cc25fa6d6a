//! CSV-to-JSON conversion for the dashboard's data exports.
//!
//! Reads a headered CSV and writes a JSON array of objects keyed by the
//! header row. Values that parse as numbers are emitted as numbers so the
//! normalizer downstream does not have to coerce strings.

use anyhow::Context;
use log::info;
use serde_json::{Map, Value};

pub fn run_convert(input: &str, output: &str) -> anyhow::Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input)
        .with_context(|| format!("opening {input}"))?;

    let headers = reader.headers()?.clone();
    let mut rows: Vec<Value> = Vec::new();

    for result in reader.records() {
        let record = result?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), field_value(field));
        }
        rows.push(Value::Object(row));
    }

    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(output, json).with_context(|| format!("writing {output}"))?;

    info!("converted {} rows from {input} to {output}", rows.len());
    println!("Wrote {} rows to {output}", rows.len());
    Ok(())
}

/// Numbers become JSON numbers, everything else stays a string. Integral
/// values are emitted without a fractional part.
fn field_value(field: &str) -> Value {
    if let Ok(int) = field.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = field.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::from(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_typing() {
        assert_eq!(field_value("42"), Value::from(42));
        assert_eq!(field_value("3.5"), Value::from(3.5));
        assert_eq!(field_value("NSW"), Value::from("NSW"));
        assert_eq!(field_value(""), Value::from(""));
    }
}
