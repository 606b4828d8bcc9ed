use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{CategoryFilter, TimeFilter};
use crate::RevenueResult;

/// Key the serialized [`Preferences`] record is stored under.
pub const PREFERENCES_KEY: &str = "dashboardPreferences";

/// String key/value storage for UI preferences (browser local storage, a
/// JSON file, or memory).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> RevenueResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> RevenueResult<()>;
}

/// Last-chosen filter pair, restored when a dashboard session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub time_filter: TimeFilter,
    pub category_filter: CategoryFilter,
}

impl Preferences {
    /// Parse a stored record. Malformed records fall back to defaults.
    pub fn from_record(record: &str) -> Self {
        match serde_json::from_str(record) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed preferences record");
                Self::default()
            }
        }
    }

    pub fn to_record(&self) -> RevenueResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load from `store`; defaults when nothing has been saved yet.
    pub fn restore(store: &dyn PreferenceStore) -> RevenueResult<Self> {
        let prefs = match store.get(PREFERENCES_KEY)? {
            Some(record) => Self::from_record(&record),
            None => Self::default(),
        };
        tracing::debug!(
            time_filter = %prefs.time_filter,
            category_filter = %prefs.category_filter,
            "restored preferences"
        );
        Ok(prefs)
    }

    pub fn persist(&self, store: &mut dyn PreferenceStore) -> RevenueResult<()> {
        store.set(PREFERENCES_KEY, self.to_record()?)
    }
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> RevenueResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> RevenueResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
