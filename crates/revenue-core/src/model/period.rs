use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::types::{Money, Rate};

/// One calendar month of expected versus collected revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePeriod {
    /// Month label, e.g. "Jan"
    pub month: String,
    /// Expected total billed for the month
    pub revenue: Money,
    /// Amount actually received
    pub collected: Money,
    /// revenue - collected, carried as recorded
    pub overdue: Money,
    pub category: Category,
    pub total_properties: u64,
}

impl RevenuePeriod {
    /// Stand-in for a missing month: everything zero.
    pub fn zero() -> Self {
        Self {
            month: String::new(),
            revenue: Decimal::ZERO,
            collected: Decimal::ZERO,
            overdue: Decimal::ZERO,
            category: Category::Residential,
            total_properties: 0,
        }
    }

    /// Billed but not yet collected. Saturates for out-of-range inputs.
    pub fn pending(&self) -> Money {
        self.revenue.saturating_sub(self.collected)
    }

    /// Collected as a percentage of revenue; zero when nothing was billed.
    pub fn collection_rate(&self) -> Rate {
        if self.revenue.is_zero() {
            return Decimal::ZERO;
        }
        self.collected
            .checked_div(self.revenue)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn period(revenue: Decimal, collected: Decimal) -> RevenuePeriod {
        RevenuePeriod {
            month: "Jan".into(),
            revenue,
            collected,
            overdue: revenue.saturating_sub(collected),
            category: Category::Residential,
            total_properties: 450,
        }
    }

    #[test]
    fn test_pending_and_collection_rate() {
        let p = period(dec!(200), dec!(150));
        assert_eq!(p.pending(), dec!(50));
        assert_eq!(p.collection_rate(), dec!(75));
    }

    #[test]
    fn test_collection_rate_zero_revenue() {
        assert_eq!(period(dec!(0), dec!(0)).collection_rate(), Decimal::ZERO);
        assert_eq!(RevenuePeriod::zero().collection_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_camel_case_with_numbers() {
        let json = r#"{"month":"Feb","revenue":52000,"collected":45000,"overdue":7000,
            "category":"commercial","totalProperties":120}"#;
        let p: RevenuePeriod = serde_json::from_str(json).unwrap();
        assert_eq!(p.revenue, dec!(52000));
        assert_eq!(p.category, Category::Commercial);
        assert_eq!(p.total_properties, 120);
    }

    #[test]
    fn test_pending_saturates() {
        let p = period(Decimal::MAX, Decimal::MIN);
        assert_eq!(p.pending(), Decimal::MAX);
    }
}
