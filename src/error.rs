use thiserror::Error;

/// Main error type for the FLAREUP engine
#[derive(Error, Debug)]
pub enum FlareupError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage backend errors (lock poisoning, unavailable backend)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A required name or identity field was blank
    #[error("Field '{field}' must not be blank")]
    BlankName { field: &'static str },

    /// Operation needs a signed-in user
    #[error("No user is signed in")]
    NoSession,

    /// Persisted slot written by an unknown schema version
    #[error("Slot '{slot}' has unsupported schema version {found}")]
    UnsupportedSchema { slot: String, found: u32 },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FlareupError {
    fn from(s: String) -> Self {
        FlareupError::Other(s)
    }
}

impl From<&str> for FlareupError {
    fn from(s: &str) -> Self {
        FlareupError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FlareupError>;
