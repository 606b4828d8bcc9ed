use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::change::{percentage_change, PercentChange};
use crate::model::RevenuePeriod;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};

/// Month-over-month movement between the last two periods of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub property_change: PercentChange,
    /// Trended on collected amounts, not billed revenue.
    pub revenue_change: PercentChange,
    pub pending_change: PercentChange,
    pub collection_change: PercentChange,

    pub current_month_properties: u64,
    pub current_month_revenue: Money,
    pub current_month_collected: Money,
    pub current_month_pending: Money,
    /// Unrounded percentage
    pub current_collection_rate: Rate,
}

/// Compare the most recent period against the one before it.
///
/// Missing periods (series shorter than two) are replaced by an all-zero
/// period, which makes the affected changes not comparable.
pub fn calculate_trend(series: &[RevenuePeriod]) -> TrendResult {
    let zero = RevenuePeriod::zero();
    let (current, previous) = match series {
        [.., prev, cur] => (cur, prev),
        [cur] => (cur, &zero),
        [] => (&zero, &zero),
    };

    let current_pending = current.pending();
    let previous_pending = previous.pending();
    let current_rate = current.collection_rate();
    let previous_rate = previous.collection_rate();

    TrendResult {
        property_change: percentage_change(
            Decimal::from(current.total_properties),
            Decimal::from(previous.total_properties),
        ),
        revenue_change: percentage_change(current.collected, previous.collected),
        pending_change: percentage_change(current_pending, previous_pending),
        collection_change: percentage_change(current_rate, previous_rate),

        current_month_properties: current.total_properties,
        current_month_revenue: current.revenue,
        current_month_collected: current.collected,
        current_month_pending: current_pending,
        current_collection_rate: current_rate,
    }
}

/// [`calculate_trend`] wrapped in the standard output envelope.
pub fn analyze_trend(series: &[RevenuePeriod]) -> ComputationOutput<TrendResult> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    if series.len() < 2 {
        warnings.push(
            "fewer than two revenue periods; trend compares against a zero period".to_string(),
        );
    }

    let result = calculate_trend(series);

    with_metadata(
        "Month-over-month trend — last period versus the one before",
        &serde_json::json!({
            "periods": series.len(),
            "revenue_change_basis": "collected",
            "rounding": "one_decimal_half_away_from_zero",
        }),
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rust_decimal_macros::dec;

    fn period(month: &str, revenue: Decimal, collected: Decimal, props: u64) -> RevenuePeriod {
        RevenuePeriod {
            month: month.into(),
            revenue,
            collected,
            overdue: revenue - collected,
            category: Category::Residential,
            total_properties: props,
        }
    }

    #[test]
    fn test_two_period_trend() {
        let series = vec![
            period("Jan", dec!(100), dec!(50), 10),
            period("Feb", dec!(200), dec!(150), 20),
        ];
        let t = calculate_trend(&series);

        // 20 vs 10 properties
        assert_eq!(t.property_change.to_string(), "100.0");
        // 150 vs 50 collected
        assert_eq!(t.revenue_change.to_string(), "200.0");
        // pending 50 vs 50
        assert_eq!(t.pending_change.to_string(), "0.0");
        // rate 75 vs 50
        assert_eq!(t.collection_change.to_string(), "50.0");

        assert_eq!(t.current_month_properties, 20);
        assert_eq!(t.current_month_revenue, dec!(200));
        assert_eq!(t.current_month_collected, dec!(150));
        assert_eq!(t.current_month_pending, dec!(50));
        assert_eq!(t.current_collection_rate, dec!(75));
    }

    #[test]
    fn test_only_last_two_periods_matter() {
        let series = vec![
            period("Jan", dec!(999), dec!(1), 1),
            period("Feb", dec!(100), dec!(50), 10),
            period("Mar", dec!(200), dec!(150), 20),
        ];
        assert_eq!(calculate_trend(&series).revenue_change.to_string(), "200.0");
    }

    #[test]
    fn test_single_period_compares_against_zero() {
        let series = vec![period("Jan", dec!(100), dec!(80), 10)];
        let t = calculate_trend(&series);
        assert_eq!(t.property_change, PercentChange::NotComparable);
        assert_eq!(t.revenue_change, PercentChange::NotComparable);
        assert_eq!(t.current_month_collected, dec!(80));
        assert_eq!(t.current_collection_rate, dec!(80));
    }

    #[test]
    fn test_empty_series_is_all_zero() {
        let t = calculate_trend(&[]);
        assert_eq!(t.property_change, PercentChange::NotComparable);
        assert_eq!(t.collection_change, PercentChange::NotComparable);
        assert_eq!(t.current_month_properties, 0);
        assert_eq!(t.current_month_revenue, Decimal::ZERO);
        assert_eq!(t.current_collection_rate, Decimal::ZERO);
    }

    #[test]
    fn test_fully_collected_month_has_no_pending_change() {
        let series = vec![
            period("Jan", dec!(100), dec!(60), 10),
            period("Feb", dec!(100), dec!(100), 10),
        ];
        let t = calculate_trend(&series);
        assert_eq!(t.current_month_pending, Decimal::ZERO);
        assert_eq!(t.pending_change, PercentChange::NotComparable);
    }

    #[test]
    fn test_analyze_trend_warns_on_short_series() {
        let out = analyze_trend(&[period("Jan", dec!(1), dec!(1), 1)]);
        assert_eq!(out.warnings.len(), 1);
        let out = analyze_trend(&[
            period("Jan", dec!(1), dec!(1), 1),
            period("Feb", dec!(2), dec!(1), 1),
        ]);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let t = calculate_trend(&[]);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["propertyChange"], serde_json::json!(0));
        assert!(v.get("currentCollectionRate").is_some());
    }
}
