use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten, result_of, scalar_text};

/// Format output as tables using the tabled crate.
///
/// Scalar and nested fields share one Field/Value table; each array of
/// records (transactions, revenue periods, cards) gets its own titled table.
pub fn print_table(value: &Value) {
    print!("{}", render(value));
}

fn render(value: &Value) -> String {
    let mut out = String::new();
    match result_of(value) {
        Value::Object(map) => render_object(map, &mut out),
        Value::Array(items) => out.push_str(&records_table(items)),
        other => {
            out.push_str(&scalar_text(other));
            out.push('\n');
        }
    }
    if let Some(envelope) = value.as_object() {
        render_envelope_notes(envelope, &mut out);
    }
    out
}

fn render_object(map: &Map<String, Value>, out: &mut String) {
    let mut fields = Vec::new();
    flatten("", &Value::Object(map.clone()), true, &mut fields);

    let (lists, scalars): (Vec<_>, Vec<_>) = fields.into_iter().partition(|(_, v)| v.is_array());

    if !scalars.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in &scalars {
            builder.push_record([key.clone(), scalar_text(val)]);
        }
        out.push_str(&format!("{}\n", Table::from(builder)));
    }

    for (key, val) in &lists {
        if let Value::Array(items) = val {
            out.push_str(&format!("\n{} ({})\n", key, items.len()));
            out.push_str(&records_table(items));
        }
    }
}

fn records_table(items: &[Value]) -> String {
    if items.is_empty() {
        return "(empty)\n".to_string();
    }

    let Some(Value::Object(first)) = items.first() else {
        let joined: Vec<String> = items.iter().map(scalar_text).collect();
        return format!("{}\n", joined.join(", "));
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in items {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(h.as_str()).map(scalar_text).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    format!("{}\n", Table::from(builder))
}

fn render_envelope_notes(envelope: &Map<String, Value>, out: &mut String) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\nWarnings:\n");
            for w in warnings.iter().filter_map(Value::as_str) {
                out.push_str(&format!("  - {}\n", w));
            }
        }
    }
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push_str(&format!("\nMethodology: {}\n", meth));
    }
}
