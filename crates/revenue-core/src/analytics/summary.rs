use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::model::{CategoryFilter, Transaction, TransactionStatus};
use crate::types::{format_one_dp, with_metadata, ComputationOutput, Money};

/// Totals over a (usually already filtered) set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_revenue: Money,
    pub total_collected: Money,
    pub total_overdue: Money,
    /// One-decimal percentage, or "0" when there is no revenue
    pub collection_rate: String,
    /// Number of transactions, not distinct properties
    pub total_properties: usize,
    /// One-decimal mean amount, or "0" for an empty set
    pub average_property_value: String,
}

impl SummaryStats {
    /// Zero totals for `count` transactions.
    pub fn zero(count: usize) -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            total_collected: Decimal::ZERO,
            total_overdue: Decimal::ZERO,
            collection_rate: "0".to_string(),
            total_properties: count,
            average_property_value: "0".to_string(),
        }
    }
}

/// Reduce transactions to revenue, collected and overdue totals.
///
/// `_category_filter` is accepted for call-site compatibility and ignored:
/// the transactions are expected to be filtered already. Totals that overflow
/// `Decimal` yield [`SummaryStats::zero`].
pub fn calculate_summary_stats(
    transactions: &[Transaction],
    _category_filter: &CategoryFilter,
) -> SummaryStats {
    let count = transactions.len();
    let totals = transactions.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(revenue, collected, overdue), t| {
            let revenue = revenue.checked_add(t.amount)?;
            match t.status {
                TransactionStatus::Completed => {
                    Some((revenue, collected.checked_add(t.amount)?, overdue))
                }
                TransactionStatus::Overdue => {
                    Some((revenue, collected, overdue.checked_add(t.amount)?))
                }
                TransactionStatus::Pending => Some((revenue, collected, overdue)),
            }
        },
    );
    let Some((total_revenue, total_collected, total_overdue)) = totals else {
        tracing::warn!(transactions = count, "transaction totals overflow; reporting zero");
        return SummaryStats::zero(count);
    };

    let collection_rate = if total_revenue.is_zero() {
        "0".to_string()
    } else {
        total_collected
            .checked_div(total_revenue)
            .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
            .map(format_one_dp)
            .unwrap_or_else(|| "0".to_string())
    };

    let average_property_value = if count == 0 {
        "0".to_string()
    } else {
        total_revenue
            .checked_div(Decimal::from(count))
            .map(format_one_dp)
            .unwrap_or_else(|| "0".to_string())
    };

    SummaryStats {
        total_revenue,
        total_collected,
        total_overdue,
        collection_rate,
        total_properties: count,
        average_property_value,
    }
}

/// [`calculate_summary_stats`] wrapped in the standard output envelope.
pub fn analyze_summary(
    transactions: &[Transaction],
    category_filter: &CategoryFilter,
) -> ComputationOutput<SummaryStats> {
    let start = Instant::now();
    let mut warnings = Vec::new();
    if transactions.is_empty() {
        warnings.push("no transactions match the current filters".to_string());
    }

    let result = calculate_summary_stats(transactions, category_filter);

    with_metadata(
        "Transaction summary — revenue, collected and overdue totals",
        &serde_json::json!({
            "transactions": transactions.len(),
            "category_filter": category_filter.to_string(),
            "total_properties_basis": "transaction_count",
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
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(id: u64, amount: Decimal, status: TransactionStatus) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            property_id: format!("P{id}"),
            owner: "Owner".into(),
            amount,
            status,
            category: Category::Residential,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let s = calculate_summary_stats(&[], &CategoryFilter::All);
        assert_eq!(s.total_revenue, Decimal::ZERO);
        assert_eq!(s.total_collected, Decimal::ZERO);
        assert_eq!(s.total_overdue, Decimal::ZERO);
        assert_eq!(s.collection_rate, "0");
        assert_eq!(s.total_properties, 0);
        assert_eq!(s.average_property_value, "0");
    }

    #[test]
    fn test_completed_and_overdue_pair() {
        let txns = vec![
            txn(1, dec!(100), TransactionStatus::Completed),
            txn(2, dec!(50), TransactionStatus::Overdue),
        ];
        let s = calculate_summary_stats(&txns, &CategoryFilter::All);
        assert_eq!(s.total_revenue, dec!(150));
        assert_eq!(s.total_collected, dec!(100));
        assert_eq!(s.total_overdue, dec!(50));
        assert_eq!(s.collection_rate, "66.7");
        assert_eq!(s.total_properties, 2);
        assert_eq!(s.average_property_value, "75.0");
    }

    #[test]
    fn test_pending_counts_toward_revenue_only() {
        let txns = vec![txn(1, dec!(80), TransactionStatus::Pending)];
        let s = calculate_summary_stats(&txns, &CategoryFilter::All);
        assert_eq!(s.total_revenue, dec!(80));
        assert_eq!(s.total_collected, Decimal::ZERO);
        assert_eq!(s.total_overdue, Decimal::ZERO);
        assert_eq!(s.collection_rate, "0.0");
    }

    #[test]
    fn test_category_filter_is_ignored() {
        let txns = vec![txn(1, dec!(100), TransactionStatus::Completed)];
        let all = calculate_summary_stats(&txns, &CategoryFilter::All);
        let vacant = calculate_summary_stats(&txns, &CategoryFilter::Only(Category::Vacant));
        assert_eq!(all, vacant);
    }

    #[test]
    fn test_analyze_summary_warns_when_empty() {
        let out = analyze_summary(&[], &CategoryFilter::All);
        assert_eq!(out.warnings, vec!["no transactions match the current filters"]);
    }

    #[test]
    fn test_overflowing_totals_fall_back_to_zero() {
        let txns = vec![
            txn(1, Decimal::MAX, TransactionStatus::Completed),
            txn(2, Decimal::MAX, TransactionStatus::Completed),
        ];
        let s = calculate_summary_stats(&txns, &CategoryFilter::All);
        assert_eq!(s, SummaryStats::zero(2));
        assert_eq!(s.collection_rate, "0");
        assert_eq!(s.average_property_value, "0");
    }

    #[test]
    fn test_single_max_amount_is_summed() {
        let txns = vec![txn(1, Decimal::MAX, TransactionStatus::Overdue)];
        let s = calculate_summary_stats(&txns, &CategoryFilter::All);
        assert_eq!(s.total_overdue, Decimal::MAX);
        assert_eq!(s.collection_rate, "0.0");
    }
}
