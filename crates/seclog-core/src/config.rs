//! Configuration for the dispatch facade.

/// Configuration for a [`crate::SecurityLogger`].
///
/// The application identifier is the only required value; it is validated
/// at facade construction, not here, so a config can be assembled from
/// partial sources first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityLogConfig {
    /// Identifier of the application instance producing events.
    pub app_id: String,
}

impl SecurityLogConfig {
    /// Create a config with the given application identifier.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads `SECLOG_APP_ID`; a missing variable leaves the id empty and
    /// facade construction will reject it.
    pub fn from_env() -> Self {
        Self {
            app_id: std::env::var("SECLOG_APP_ID").unwrap_or_default(),
        }
    }
}
