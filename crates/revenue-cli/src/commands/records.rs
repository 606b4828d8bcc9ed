use clap::Args;
use serde_json::Value;
use std::fs::File;
use std::io;

use revenue_core::filters::{filter_revenue_data, filter_transactions};
use revenue_core::model::{CategoryFilter, TimeFilter};

use super::{resolve_query, FilterArgs};
use crate::input;
use crate::output::csv_out;
use crate::Context;

/// Arguments for listing transactions
#[derive(Args)]
pub struct TransactionsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Write the filtered rows as CSV to this file; "-" sends the CSV to
    /// stdout in place of the formatted output
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,
}

/// Arguments for the revenue series
#[derive(Args)]
pub struct RevenueArgs {
    /// Recency window: 1m, 3m, 6m or 1y
    #[arg(long, default_value = "6m")]
    pub time: TimeFilter,

    /// Property category or "all"
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
}

pub fn run_transactions(
    args: TransactionsArgs,
    ctx: &Context,
) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_dataset(ctx)?;
    let query = resolve_query(&args.filters, ctx)?;
    let rows = filter_transactions(
        &data.transactions,
        &query.search_term,
        &query.time_filter,
        &query.category_filter,
        query.as_of,
    );

    match args.export.as_deref() {
        Some("-") => {
            csv_out::write_transactions_csv(io::stdout().lock(), &rows)?;
            return Ok(Value::Null);
        }
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create '{}': {}", path, e))?;
            csv_out::write_transactions_csv(file, &rows)?;
            tracing::info!(path, rows = rows.len(), "exported transactions");
        }
        None => {}
    }

    Ok(serde_json::to_value(rows)?)
}

pub fn run_revenue(args: RevenueArgs, ctx: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_dataset(ctx)?;
    if !args.time.is_recognised() {
        tracing::warn!(time_filter = %args.time, "unrecognised time filter; no periods match");
    }
    let series = filter_revenue_data(&data.revenue, &args.time, &args.category);
    Ok(serde_json::to_value(series)?)
}
