pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod model;
pub mod types;

#[cfg(feature = "sample")]
pub mod sample;

pub use error::RevenueError;
pub use types::*;

/// Standard result type for all revenue-analytics operations
pub type RevenueResult<T> = Result<T, RevenueError>;
