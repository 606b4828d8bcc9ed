pub mod revenue;
pub mod transactions;

pub use revenue::filter_revenue_data;
pub use transactions::filter_transactions;
