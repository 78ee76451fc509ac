//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Resolver error
#[derive(Debug, Error)]
pub enum Error {
    /// `DATABASE_CLIENT` named a backend outside the supported set
    #[error("unsupported database client: {0}")]
    UnsupportedBackend(String),

    /// Pool bounds are inverted (only raised by explicit validation)
    #[error("invalid pool size: min ({min}) is greater than max ({max})")]
    InvalidPool {
        /// Resolved minimum
        min: u32,
        /// Resolved maximum
        max: u32,
    },

    /// Descriptor could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from backend selection
    pub fn is_unsupported_backend(&self) -> bool {
        matches!(self, Self::UnsupportedBackend(_))
    }
}
