use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use revenue_core::dashboard::{DashboardQuery, Preferences};
use revenue_core::model::{CategoryFilter, DashboardData, RevenuePeriod, TimeFilter, Transaction};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse<T: for<'de> Deserialize<'de>>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

fn to_json<T: serde::Serialize>(value: &T) -> NapiResult<String> {
    serde_json::to_string(value).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ChangeInput {
    current: Decimal,
    previous: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionFilterInput {
    transactions: Vec<Transaction>,
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    time_filter: TimeFilter,
    #[serde(default)]
    category_filter: CategoryFilter,
    as_of: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevenueFilterInput {
    series: Vec<RevenuePeriod>,
    #[serde(default)]
    time_filter: TimeFilter,
    #[serde(default)]
    category_filter: CategoryFilter,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryInput {
    transactions: Vec<Transaction>,
    #[serde(default)]
    category_filter: CategoryFilter,
}

#[derive(Deserialize)]
struct DashboardInput {
    data: DashboardData,
    query: DashboardQuery,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// `{"current": .., "previous": ..}` -> `"12.5"` or `0`.
#[napi]
pub fn percentage_change(input_json: String) -> NapiResult<String> {
    let input: ChangeInput = parse(&input_json)?;
    to_json(&revenue_core::analytics::percentage_change(input.current, input.previous))
}

#[napi]
pub fn calculate_trend(series_json: String) -> NapiResult<String> {
    let series: Vec<RevenuePeriod> = parse(&series_json)?;
    to_json(&revenue_core::analytics::trend::analyze_trend(&series))
}

#[napi]
pub fn calculate_summary_stats(input_json: String) -> NapiResult<String> {
    let input: SummaryInput = parse(&input_json)?;
    to_json(&revenue_core::analytics::summary::analyze_summary(
        &input.transactions,
        &input.category_filter,
    ))
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[napi]
pub fn filter_transactions(input_json: String) -> NapiResult<String> {
    let input: TransactionFilterInput = parse(&input_json)?;
    to_json(&revenue_core::filters::filter_transactions(
        &input.transactions,
        &input.search_term,
        &input.time_filter,
        &input.category_filter,
        input.as_of,
    ))
}

#[napi]
pub fn filter_revenue_data(input_json: String) -> NapiResult<String> {
    let input: RevenueFilterInput = parse(&input_json)?;
    to_json(&revenue_core::filters::filter_revenue_data(
        &input.series,
        &input.time_filter,
        &input.category_filter,
    ))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Full view-model for `{"data": .., "query": ..}`. Call on every filter change.
#[napi]
pub fn recompute_dashboard(input_json: String) -> NapiResult<String> {
    let input: DashboardInput = parse(&input_json)?;
    input.data.validate().map_err(to_napi_error)?;
    to_json(&revenue_core::dashboard::build_dashboard(&input.data, &input.query))
}

#[napi]
pub fn sample_dataset() -> NapiResult<String> {
    to_json(&DashboardData::sample())
}

// ---------------------------------------------------------------------------
// Preferences
//
// The JS side owns localStorage; these only translate the stored record.
// ---------------------------------------------------------------------------

/// Stored record (or null) -> preferences object, defaults when absent or malformed.
#[napi]
pub fn restore_preferences(record: Option<String>) -> NapiResult<String> {
    let prefs = record
        .as_deref()
        .map(Preferences::from_record)
        .unwrap_or_default();
    to_json(&prefs)
}

/// Preferences object -> record to store under `dashboardPreferences`.
#[napi]
pub fn persist_preferences(prefs_json: String) -> NapiResult<String> {
    let prefs: Preferences = parse(&prefs_json)?;
    prefs.to_record().map_err(to_napi_error)
}

#[napi]
pub fn preferences_key() -> String {
    revenue_core::dashboard::PREFERENCES_KEY.to_string()
}
