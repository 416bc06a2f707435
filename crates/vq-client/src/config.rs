//! Session configuration

use std::path::PathBuf;
use std::time::Duration;
use vq_state::DEFAULT_HISTORY_LIMIT;

/// Explorer session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the query backend
    pub api_url: String,
    /// URL of the static schema document
    pub schema_url: String,
    /// Budget for one location acquisition
    pub location_timeout: Duration,
    /// Conversation turns retained and replayed as context
    pub history_limit: usize,
    /// Directory backing the client preferences
    pub prefs_dir: PathBuf,
}

impl SessionConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With backend base URL
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// With schema document URL
    #[must_use]
    pub fn with_schema_url(mut self, url: impl Into<String>) -> Self {
        self.schema_url = url.into();
        self
    }

    /// With location acquisition budget
    #[must_use]
    pub fn with_location_timeout(mut self, timeout: Duration) -> Self {
        self.location_timeout = timeout;
        self
    }

    /// With conversation history cap
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// With preferences directory
    #[must_use]
    pub fn with_prefs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prefs_dir = dir.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            schema_url: "http://127.0.0.1:8000/data_schema.json".to_string(),
            location_timeout: Duration::from_secs(15),
            history_limit: DEFAULT_HISTORY_LIMIT,
            prefs_dir: PathBuf::from(".vizquery"),
        }
    }
}
