use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::period::RevenuePeriod;
use super::property::PropertyCategoryStat;
use super::transaction::Transaction;
use crate::error::RevenueError;
use crate::RevenueResult;

/// The base collections every dashboard view is derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Monthly series, oldest first
    #[serde(default)]
    pub revenue: Vec<RevenuePeriod>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub properties: Vec<PropertyCategoryStat>,
}

impl DashboardData {
    /// Reject datasets that break the record invariants: negative revenue
    /// figures, non-positive transaction amounts, duplicate transaction ids.
    pub fn validate(&self) -> RevenueResult<()> {
        for (i, p) in self.revenue.iter().enumerate() {
            require_non_negative(p.revenue, &format!("revenue[{i}].revenue"))?;
            require_non_negative(p.collected, &format!("revenue[{i}].collected"))?;
        }

        let mut seen = HashSet::with_capacity(self.transactions.len());
        for (i, t) in self.transactions.iter().enumerate() {
            if t.amount <= Decimal::ZERO {
                return Err(RevenueError::InvalidInput {
                    field: format!("transactions[{i}].amount"),
                    reason: "amount must be positive".into(),
                });
            }
            if !seen.insert(t.id) {
                return Err(RevenueError::InvalidInput {
                    field: format!("transactions[{i}].id"),
                    reason: format!("duplicate transaction id {}", t.id),
                });
            }
        }

        for (i, s) in self.properties.iter().enumerate() {
            require_non_negative(s.value, &format!("properties[{i}].value"))?;
        }
        Ok(())
    }
}

fn require_non_negative(value: Decimal, name: &str) -> RevenueResult<()> {
    if value < Decimal::ZERO {
        return Err(RevenueError::InvalidInput {
            field: name.to_string(),
            reason: format!("{name} must not be negative"),
        });
    }
    Ok(())
}
