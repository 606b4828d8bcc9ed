use clap::Args;
use serde_json::Value;

use revenue_core::dashboard::build_dashboard;

use super::{resolve_query, FilterArgs};
use crate::input;
use crate::Context;

/// Arguments for the full dashboard view
#[derive(Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub fn run_dashboard(args: DashboardArgs, ctx: &Context) -> Result<Value, Box<dyn std::error::Error>> {
    let data = input::load_dataset(ctx)?;
    let query = resolve_query(&args.filters, ctx)?;
    let result = build_dashboard(&data, &query);
    Ok(serde_json::to_value(result)?)
}
