use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevenueError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown property category: '{0}'")]
    UnknownCategory(String),

    #[error("Preference store error: {0}")]
    PreferenceStore(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RevenueError {
    fn from(e: serde_json::Error) -> Self {
        RevenueError::SerializationError(e.to_string())
    }
}
