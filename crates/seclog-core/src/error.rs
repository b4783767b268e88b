//! Error types for seclog.

use thiserror::Error;

/// Errors raised by the seclog core.
///
/// Failures of the underlying sink are intentionally absent: the facade
/// never catches, wraps, or retries them.
#[derive(Error, Debug)]
pub enum Error {
    /// The facade was constructed with unusable configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a new invalid-configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type alias using seclog's Error.
pub type Result<T> = std::result::Result<T, Error>;
