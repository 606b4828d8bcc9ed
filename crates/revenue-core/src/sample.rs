//! Built-in sample dataset: one year of monthly revenue, the latest billing
//! transactions and the property register by category.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{
    Category, DashboardData, PropertyCategoryStat, RevenuePeriod, Transaction, TransactionStatus,
};

fn period(
    month: &str,
    revenue: Decimal,
    collected: Decimal,
    overdue: Decimal,
    category: Category,
    total_properties: u64,
) -> RevenuePeriod {
    RevenuePeriod {
        month: month.to_string(),
        revenue,
        collected,
        overdue,
        category,
        total_properties,
    }
}

/// Twelve months, January to December.
pub fn revenue_series() -> Vec<RevenuePeriod> {
    use Category::*;
    vec![
        period("Jan", dec!(45000), dec!(38000), dec!(7000), Residential, 450),
        period("Feb", dec!(52000), dec!(45000), dec!(7000), Commercial, 120),
        period("Mar", dec!(48000), dec!(41000), dec!(7000), Industrial, 45),
        period("Apr", dec!(51000), dec!(47000), dec!(4000), Residential, 450),
        period("May", dec!(54000), dec!(49000), dec!(5000), Commercial, 120),
        period("Jun", dec!(49000), dec!(43000), dec!(6000), Industrial, 45),
        period("Jul", dec!(55000), dec!(50000), dec!(5000), MixedUse, 60),
        period("Aug", dec!(56000), dec!(51000), dec!(5000), Agricultural, 85),
        period("Sep", dec!(53000), dec!(48000), dec!(5000), Industrial, 45),
        period("Oct", dec!(60000), dec!(55000), dec!(5000), Agricultural, 85),
        period("Nov", dec!(58000), dec!(53000), dec!(5000), Vacant, 20),
        period("Dec", dec!(62000), dec!(57000), dec!(5000), MixedUse, 60),
    ]
}

fn txn(
    id: u64,
    (y, m, d): (i32, u32, u32),
    property_id: &str,
    owner: &str,
    amount: Decimal,
    status: TransactionStatus,
    category: Category,
) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        property_id: property_id.to_string(),
        owner: owner.to_string(),
        amount,
        status,
        category,
    }
}

/// Ten transactions dated 2024-03-01 through 2024-03-10, newest first.
pub fn transactions() -> Vec<Transaction> {
    use Category::*;
    use TransactionStatus::*;
    vec![
        txn(1, (2024, 3, 10), "P123", "John Doe", dec!(2500), Completed, Residential),
        txn(2, (2024, 3, 9), "P124", "Jane Smith", dec!(1800), Pending, Commercial),
        txn(3, (2024, 3, 8), "P125", "Bob Wilson", dec!(3200), Completed, Industrial),
        txn(4, (2024, 3, 7), "P126", "Alice Brown", dec!(1500), Overdue, Residential),
        txn(5, (2024, 3, 6), "P127", "Charlie Davis", dec!(2100), Completed, Commercial),
        txn(6, (2024, 3, 5), "P128", "Emily Green", dec!(1200), Completed, Agricultural),
        txn(7, (2024, 3, 4), "P129", "Frank Taylor", dec!(2700), Pending, MixedUse),
        txn(8, (2024, 3, 3), "P130", "Grace Lee", dec!(800), Overdue, Vacant),
        txn(9, (2024, 3, 2), "P131", "Henry Johnson", dec!(3000), Completed, Industrial),
        txn(10, (2024, 3, 1), "P132", "Ivy Martinez", dec!(2200), Pending, Agricultural),
    ]
}

/// Property counts and annual rates per category.
pub fn property_stats() -> Vec<PropertyCategoryStat> {
    use Category::*;
    [
        (Residential, 450, dec!(1000)),
        (Commercial, 120, dec!(2500)),
        (Industrial, 45, dec!(5000)),
        (Agricultural, 85, dec!(750)),
        (Recreational, 30, dec!(1500)),
        (MixedUse, 60, dec!(2000)),
        (Vacant, 20, dec!(500)),
    ]
    .into_iter()
    .map(|(category, count, rate)| PropertyCategoryStat {
        category,
        count,
        rate,
        value: rate,
    })
    .collect()
}

impl DashboardData {
    /// The built-in sample dataset.
    pub fn sample() -> Self {
        Self {
            revenue: revenue_series(),
            transactions: transactions(),
            properties: property_stats(),
        }
    }
}
