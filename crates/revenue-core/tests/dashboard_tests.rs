use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use revenue_core::analytics::PercentChange;
use revenue_core::dashboard::{
    build_dashboard, recompute_view, DashboardQuery, MemoryPreferenceStore, PreferenceStore,
    Preferences, TrendDirection, PREFERENCES_KEY,
};
use revenue_core::model::{Category, CategoryFilter, DashboardData, TimeFilter};
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end dashboard sessions over the sample dataset
// ===========================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn test_default_view_over_sample() {
    let data = DashboardData::sample();
    let out = build_dashboard(&data, &DashboardQuery::new(as_of()));
    let view = &out.result;

    assert!(out.warnings.is_empty(), "unexpected warnings: {:?}", out.warnings);
    assert_eq!(view.transactions.len(), 10);
    // six months: Jul..Dec
    assert_eq!(view.revenue.first().map(|p| p.month.as_str()), Some("Jul"));
    assert_eq!(view.revenue.len(), 6);

    assert_eq!(view.summary.stats.total_revenue, dec!(21000));
    assert_eq!(view.summary.stats.collection_rate, "57.1");
    assert_eq!(view.summary.revenue_trend.to_string(), "7.5");

    let titles: Vec<&str> = view.stat_cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Total Properties", "Revenue Collected", "Pending Bills", "Collection Rate"]
    );
    assert!(view.stat_cards.iter().all(|c| c.direction == TrendDirection::Up));
}

#[test]
fn test_search_only_changes_transaction_side() {
    let data = DashboardData::sample();
    let base = recompute_view(&data, &DashboardQuery::new(as_of()));
    let q = DashboardQuery {
        search_term: "jane".into(),
        ..DashboardQuery::new(as_of())
    };
    let searched = recompute_view(&data, &q);

    assert_eq!(searched.transactions.len(), 1);
    assert_eq!(searched.summary.stats.total_revenue, dec!(1800));
    assert_eq!(searched.summary.stats.collection_rate, "0.0");
    assert_eq!(searched.revenue, base.revenue);
    assert_eq!(searched.trend, base.trend);
}

#[test]
fn test_short_series_warns() {
    let mut data = DashboardData::sample();
    data.revenue.truncate(1);
    let out = build_dashboard(&data, &DashboardQuery::new(as_of()));
    assert_eq!(out.result.trend.revenue_change, PercentChange::NotComparable);
    assert!(out.warnings.iter().any(|w| w.starts_with("fewer than two revenue periods")));
}

#[test]
fn test_session_restores_and_persists_preferences() {
    let data = DashboardData::sample();
    let mut store = MemoryPreferenceStore::new();

    // First session: nothing saved, defaults apply; user narrows the view.
    let prefs = Preferences::restore(&store).unwrap();
    let mut query = DashboardQuery::from_preferences(&prefs, as_of());
    assert_eq!(query.time_filter, TimeFilter::SixMonths);
    query.time_filter = TimeFilter::OneYear;
    query.category_filter = CategoryFilter::Only(Category::Agricultural);
    query.preferences().persist(&mut store).unwrap();

    // Second session picks the same filters back up.
    let restored = Preferences::restore(&store).unwrap();
    let query2 = DashboardQuery::from_preferences(&restored, as_of());
    let view = recompute_view(&data, &query2);
    let months: Vec<&str> = view.revenue.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["Aug", "Oct"]);
    assert_eq!(view.transactions.len(), 2);
    assert!(store.get(PREFERENCES_KEY).unwrap().is_some());
}

#[test]
fn test_view_serializes_for_presentation() {
    let view = recompute_view(&DashboardData::sample(), &DashboardQuery::new(as_of()));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["query"]["timeFilter"], "6m");
    assert_eq!(json["query"]["categoryFilter"], "all");
    assert_eq!(json["query"]["asOf"], "2024-03-15");
    assert_eq!(json["trend"]["propertyChange"], "200.0");
    assert_eq!(json["summary"]["totalProperties"], 10);
    assert_eq!(json["transactions"][1]["propertyId"], "P124");
    assert_eq!(json["propertyDistribution"][0]["category"], "residential");
}

#[test]
fn test_extreme_amounts_recompute_without_overflow() {
    let mut data = DashboardData::sample();
    for t in data.transactions.iter_mut().take(2) {
        t.amount = rust_decimal::Decimal::MAX;
    }
    for p in data.properties.iter_mut().take(2) {
        p.value = rust_decimal::Decimal::MAX;
    }
    assert!(data.validate().is_ok());

    let view = recompute_view(&data, &DashboardQuery::new(as_of()));
    assert_eq!(view.summary.stats.total_revenue, dec!(0));
    assert_eq!(view.summary.stats.collection_rate, "0");
    assert_eq!(view.summary.stats.total_properties, 10);
    assert!(view.property_distribution.iter().all(|s| s.share_pct == dec!(0)));
}
