use serde_json::Value;
use std::io;

use revenue_core::model::Transaction;

use super::{flatten, result_of, scalar_text};

/// Column order of the transaction export.
pub const TRANSACTION_HEADER: [&str; 6] = ["Date", "Property ID", "Owner", "Amount", "Status", "Category"];

/// Write transactions in export format, one row per transaction in the given order.
pub fn write_transactions_csv<W: io::Write>(writer: W, rows: &[Transaction]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTION_HEADER)?;
    for t in rows {
        wtr.write_record([
            t.date.to_string(),
            t.property_id.clone(),
            t.owner.clone(),
            t.amount.to_string(),
            t.status.as_str().to_string(),
            t.category.as_str().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write output as CSV to stdout.
///
/// A transaction list uses the export format; other arrays of records get a
/// header from their first record; objects become `field,value` rows with
/// nested keys flattened.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        tracing::error!(error = %e, "failed to write CSV");
    }
}

fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let body = result_of(value);

    if let Value::Array(items) = body {
        if !items.is_empty() {
            if let Ok(rows) = serde_json::from_value::<Vec<Transaction>>(body.clone()) {
                return write_transactions_csv(writer, &rows);
            }
        }
        return write_records(writer, items);
    }

    let mut wtr = csv::Writer::from_writer(writer);
    match body {
        Value::Object(_) => {
            let mut fields = Vec::new();
            flatten("", body, false, &mut fields);
            wtr.write_record(["field", "value"])?;
            for (key, val) in &fields {
                wtr.write_record([key.as_str(), &scalar_text(val)])?;
            }
        }
        _ => wtr.write_record([scalar_text(body)])?,
    }
    wtr.flush()?;
    Ok(())
}

fn write_records<W: io::Write>(writer: W, items: &[Value]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if let Some(Value::Object(first)) = items.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        wtr.write_record(&headers)?;
        for item in items {
            let row: Vec<String> = headers
                .iter()
                .map(|h| item.get(*h).map(scalar_text).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    } else {
        for item in items {
            wtr.write_record([scalar_text(item)])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
