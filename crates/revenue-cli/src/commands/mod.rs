pub mod analytics;
pub mod dashboard;
pub mod prefs;
pub mod records;

use chrono::NaiveDate;
use clap::Args;

use revenue_core::dashboard::{DashboardQuery, Preferences};
use revenue_core::model::{CategoryFilter, TimeFilter};

use crate::prefs_store::JsonFilePreferenceStore;
use crate::Context;

/// Filter inputs shared by the dashboard, transactions and summary commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive match against owner or property id
    #[arg(long, default_value = "")]
    pub search: String,

    /// Recency window: 1m, 3m, 6m or 1y (saved preference when omitted)
    #[arg(long)]
    pub time: Option<TimeFilter>,

    /// Property category or "all" (saved preference when omitted)
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Reference date for the recency window (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Remember the effective time and category filters
    #[arg(long)]
    pub save_prefs: bool,
}

/// Build the query from the flags, filling gaps from the preference file.
pub fn resolve_query(
    filters: &FilterArgs,
    ctx: &Context,
) -> Result<DashboardQuery, Box<dyn std::error::Error>> {
    let mut store = JsonFilePreferenceStore::new(ctx.prefs_path.clone());
    let saved = if filters.time.is_some() && filters.category.is_some() {
        Preferences::default()
    } else {
        Preferences::restore(&store)?
    };

    let as_of = filters
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let query = DashboardQuery {
        search_term: filters.search.clone(),
        time_filter: filters.time.clone().unwrap_or(saved.time_filter),
        category_filter: filters.category.unwrap_or(saved.category_filter),
        as_of,
    };

    if filters.save_prefs {
        query.preferences().persist(&mut store)?;
    }
    Ok(query)
}

