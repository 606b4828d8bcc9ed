use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::types::Money;

/// Property count and billing rate for one category, as shown in the
/// distribution and category-performance charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCategoryStat {
    pub category: Category,
    pub count: u64,
    pub rate: Money,
    pub value: Decimal,
}
