// Error type shared by the adapter crates.
//
// Extraction itself never fails the caller; these errors cover configuration,
// URL and JSON conversion failures, plus subscriber installation.

/// Internal (non-HTTP) error for the Discord adapter.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tracing setup failed: {0}")]
    Tracing(String),

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Unified result type for adapter operations.
pub type Result<T> = std::result::Result<T, AuthError>;
