pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` of an envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Flatten nested objects into `parent.child` keys. Arrays are indexed
/// (`transactions.0.owner`) unless `keep_arrays` is set, in which case they
/// are left for the caller.
pub(crate) fn flatten(prefix: &str, value: &Value, keep_arrays: bool, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten(&join_key(prefix, key), val, keep_arrays, out);
            }
        }
        Value::Array(items) if !keep_arrays => {
            for (i, val) in items.iter().enumerate() {
                flatten(&join_key(prefix, &i.to_string()), val, keep_arrays, out);
            }
        }
        _ => out.push((prefix.to_string(), value.clone())),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Scalar rendering shared by the text formatters; `null` is blank.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
