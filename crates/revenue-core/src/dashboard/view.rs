use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::cards::{stat_cards, StatCard};
use super::preferences::Preferences;
use crate::analytics::{
    calculate_summary_stats, calculate_trend, property_distribution, CategoryShare,
    PercentChange, SummaryStats, TrendResult,
};
use crate::filters::{filter_revenue_data, filter_transactions};
use crate::model::{CategoryFilter, DashboardData, RevenuePeriod, TimeFilter, Transaction};
use crate::types::{with_metadata, ComputationOutput};

/// Every input the dashboard reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub time_filter: TimeFilter,
    #[serde(default)]
    pub category_filter: CategoryFilter,
    /// Reference date for the recency window
    pub as_of: NaiveDate,
}

impl DashboardQuery {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            search_term: String::new(),
            time_filter: TimeFilter::default(),
            category_filter: CategoryFilter::default(),
            as_of,
        }
    }

    /// Query seeded from saved filter preferences.
    pub fn from_preferences(prefs: &Preferences, as_of: NaiveDate) -> Self {
        Self {
            time_filter: prefs.time_filter.clone(),
            category_filter: prefs.category_filter,
            ..Self::new(as_of)
        }
    }

    /// The part of the query worth remembering between sessions.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            time_filter: self.time_filter.clone(),
            category_filter: self.category_filter,
        }
    }
}

/// Summary stats of the filtered transactions plus the month-over-month
/// changes of the full revenue series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendedSummary {
    #[serde(flatten)]
    pub stats: SummaryStats,
    pub property_trend: PercentChange,
    pub revenue_trend: PercentChange,
    pub pending_trend: PercentChange,
    pub collection_trend: PercentChange,
}

impl TrendedSummary {
    pub fn new(stats: SummaryStats, trend: &TrendResult) -> Self {
        Self {
            stats,
            property_trend: trend.property_change,
            revenue_trend: trend.revenue_change,
            pending_trend: trend.pending_change,
            collection_trend: trend.collection_change,
        }
    }
}

/// Everything the presentation layer renders for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub query: DashboardQuery,
    pub trend: TrendResult,
    pub summary: TrendedSummary,
    pub stat_cards: Vec<StatCard>,
    pub transactions: Vec<Transaction>,
    pub revenue: Vec<RevenuePeriod>,
    pub property_distribution: Vec<CategoryShare>,
}

/// Derive the complete view-model. Call again whenever any query input changes.
///
/// The trend always uses the unfiltered revenue series; the summary uses the
/// filtered transactions.
pub fn recompute_view(data: &DashboardData, query: &DashboardQuery) -> DashboardView {
    let transactions = filter_transactions(
        &data.transactions,
        &query.search_term,
        &query.time_filter,
        &query.category_filter,
        query.as_of,
    );
    let revenue = filter_revenue_data(&data.revenue, &query.time_filter, &query.category_filter);

    let trend = calculate_trend(&data.revenue);
    let stats = calculate_summary_stats(&transactions, &query.category_filter);

    tracing::debug!(
        time_filter = %query.time_filter,
        category_filter = %query.category_filter,
        search = %query.search_term,
        transactions = transactions.len(),
        periods = revenue.len(),
        "recomputed dashboard view"
    );

    DashboardView {
        query: query.clone(),
        summary: TrendedSummary::new(stats, &trend),
        stat_cards: stat_cards(&trend),
        trend,
        transactions,
        revenue,
        property_distribution: property_distribution(&data.properties),
    }
}

/// [`recompute_view`] wrapped in the standard output envelope, with warnings
/// for queries that silently produce empty or degenerate results.
pub fn build_dashboard(
    data: &DashboardData,
    query: &DashboardQuery,
) -> ComputationOutput<DashboardView> {
    let start = Instant::now();
    let view = recompute_view(data, query);

    let mut warnings = Vec::new();
    if !query.time_filter.is_recognised() {
        tracing::warn!(time_filter = %query.time_filter, "unrecognised time filter");
        warnings.push(format!(
            "time filter '{}' is not recognised; no records match",
            query.time_filter
        ));
    }
    if data.revenue.len() < 2 {
        warnings.push(
            "fewer than two revenue periods; trend compares against a zero period".to_string(),
        );
    }
    if view.transactions.is_empty() {
        warnings.push("no transactions match the current filters".to_string());
    }

    with_metadata(
        "Revenue dashboard — filtered transactions and series, summary, month-over-month trend",
        &serde_json::json!({
            "as_of": query.as_of.to_string(),
            "trend_basis": "unfiltered_revenue_series",
            "summary_basis": "filtered_transactions",
            "total_properties_basis": "transaction_count",
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        view,
    )
}
