//! Record types the engine consumes: monthly revenue periods, billing
//! transactions, per-category property statistics and the filter selectors.

pub mod category;
pub mod dataset;
pub mod period;
pub mod property;
pub mod transaction;
pub mod window;

pub use category::{Category, CategoryFilter};
pub use dataset::DashboardData;
pub use period::RevenuePeriod;
pub use property::PropertyCategoryStat;
pub use transaction::{Transaction, TransactionStatus};
pub use window::TimeFilter;
