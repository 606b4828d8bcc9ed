use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{PercentChange, TrendResult};
use crate::types::format_one_dp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardUnit {
    Count,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// A headline figure with its change from the previous month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: Decimal,
    pub unit: CardUnit,
    pub trend: PercentChange,
    pub direction: TrendDirection,
}

impl StatCard {
    fn new(title: &str, value: Decimal, unit: CardUnit, trend: PercentChange) -> Self {
        let direction = if trend.is_positive() {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Self {
            title: title.to_string(),
            value,
            unit,
            trend,
            direction,
        }
    }

    /// e.g. "12.5% from previous month"
    pub fn trend_label(&self) -> String {
        let magnitude = match self.trend {
            PercentChange::NotComparable => "0".to_string(),
            PercentChange::Change(_) => format_one_dp(self.trend.magnitude()),
        };
        format!("{magnitude}% from previous month")
    }
}

/// The four headline cards, in display order.
pub fn stat_cards(trend: &TrendResult) -> Vec<StatCard> {
    vec![
        StatCard::new(
            "Total Properties",
            Decimal::from(trend.current_month_properties),
            CardUnit::Count,
            trend.property_change,
        ),
        StatCard::new(
            "Revenue Collected",
            trend.current_month_collected,
            CardUnit::Currency,
            trend.revenue_change,
        ),
        StatCard::new(
            "Pending Bills",
            trend.current_month_pending,
            CardUnit::Count,
            trend.pending_change,
        ),
        StatCard::new(
            "Collection Rate",
            trend.current_collection_rate,
            CardUnit::Percent,
            trend.collection_change,
        ),
    ]
}
