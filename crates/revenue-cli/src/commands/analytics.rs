use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use revenue_core::analytics::{percentage_change, summary, trend};
use revenue_core::filters::filter_transactions;

use super::{resolve_query, FilterArgs};
use crate::input;
use crate::Context;

/// Arguments for summary statistics
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for a single percentage change
#[derive(Args)]
pub struct ChangeArgs {
    /// Current value
    #[arg(allow_negative_numbers = true)]
    pub current: Decimal,

    /// Previous value
    #[arg(allow_negative_numbers = true)]
    pub previous: Decimal,
}

pub fn run_trend(ctx: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_dataset(ctx)?;
    let result = trend::analyze_trend(&data.revenue);
    Ok(serde_json::to_value(result)?)
}

pub fn run_summary(args: SummaryArgs, ctx: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_dataset(ctx)?;
    let query = resolve_query(&args.filters, ctx)?;
    let rows = filter_transactions(
        &data.transactions,
        &query.search_term,
        &query.time_filter,
        &query.category_filter,
        query.as_of,
    );
    let result = summary::analyze_summary(&rows, &query.category_filter);
    Ok(serde_json::to_value(result)?)
}

pub fn run_change(args: ChangeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let change = percentage_change(args.current, args.previous);
    Ok(serde_json::json!({
        "current": args.current,
        "previous": args.previous,
        "change": change,
        "comparable": change.is_comparable(),
    }))
}
