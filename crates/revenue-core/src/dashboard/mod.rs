//! Dashboard view-model: the combined output handed to the presentation
//! layer, the headline cards, and the filter preferences that outlive a
//! session.
//!
//! There is no subscription model. Callers invoke [`view::recompute_view`]
//! each time the search term, time filter or category filter changes.

pub mod cards;
pub mod preferences;
pub mod view;

pub use cards::{stat_cards, CardUnit, StatCard, TrendDirection};
pub use preferences::{MemoryPreferenceStore, PreferenceStore, Preferences, PREFERENCES_KEY};
pub use view::{build_dashboard, recompute_view, DashboardQuery, DashboardView, TrendedSummary};
