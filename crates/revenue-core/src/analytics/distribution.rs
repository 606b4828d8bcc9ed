use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Category, PropertyCategoryStat};
use crate::types::{round_display, Rate};

/// One slice of the property distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub count: u64,
    pub value: Decimal,
    /// Whole percent of the summed value
    pub share_pct: Rate,
}

/// Share of total value held by each category, in input order.
///
/// A zero total, or one that overflows `Decimal`, gives every category a 0 share.
pub fn property_distribution(stats: &[PropertyCategoryStat]) -> Vec<CategoryShare> {
    let total = stats
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.value))
        .unwrap_or_else(|| {
            tracing::warn!(categories = stats.len(), "property value total overflows");
            Decimal::ZERO
        });

    stats
        .iter()
        .map(|s| {
            let share_pct = if total.is_zero() {
                Decimal::ZERO
            } else {
                s.value
                    .checked_div(total)
                    .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                    .map(|pct| round_display(pct, 0))
                    .unwrap_or(Decimal::ZERO)
            };
            CategoryShare {
                category: s.category,
                count: s.count,
                value: s.value,
                share_pct,
            }
        })
        .collect()
}
