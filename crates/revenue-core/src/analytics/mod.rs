//! Aggregations over the base collections: percentage changes, the
//! month-over-month trend, transaction summaries and the property
//! distribution.

pub mod change;
pub mod distribution;
pub mod summary;
pub mod trend;

pub use change::{percentage_change, PercentChange};
pub use distribution::{property_distribution, CategoryShare};
pub use summary::{calculate_summary_stats, SummaryStats};
pub use trend::{calculate_trend, TrendResult};
