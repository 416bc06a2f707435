//! Client preferences
//!
//! Two keys persisted under one directory, file per key:
//! - `location_enabled`: the string `"true"` or `"false"`
//! - `initial_query`: a transient query hand-off consumed once at startup
//!
//! All I/O failures are absorbed: reads fall back to defaults, writes log
//! and return. Preference state never blocks a query.

use std::fs;
use std::path::{Path, PathBuf};

const LOCATION_KEY: &str = "location_enabled";
const INITIAL_QUERY_KEY: &str = "initial_query";

/// File-backed client preferences
#[derive(Debug, Clone)]
pub struct ClientPrefs {
    dir: PathBuf,
}

impl ClientPrefs {
    /// Create preferences rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Whether the user enabled location services; defaults to `false`
    #[must_use]
    pub fn location_enabled(&self) -> bool {
        self.read_key(LOCATION_KEY)
            .map(|value| value.trim() == "true")
            .unwrap_or(false)
    }

    /// Persist the location preference
    pub fn set_location_enabled(&self, enabled: bool) {
        self.write_key(LOCATION_KEY, if enabled { "true" } else { "false" });
    }

    /// Stash a query to run on next startup
    pub fn store_initial_query(&self, query: &str) {
        self.write_key(INITIAL_QUERY_KEY, query);
    }

    /// Consume the stashed startup query: read once, then delete
    ///
    /// A second call returns `None`.
    #[must_use]
    pub fn take_initial_query(&self) -> Option<String> {
        let value = self.read_key(INITIAL_QUERY_KEY)?;
        if let Err(err) = fs::remove_file(self.key_path(INITIAL_QUERY_KEY)) {
            tracing::warn!("failed to clear initial query: {err}");
        }
        let value = value.trim().to_string();
        (!value.is_empty()).then_some(value)
    }

    /// The backing directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write_key(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            tracing::warn!("failed to create prefs dir: {err}");
            return;
        }
        if let Err(err) = fs::write(self.key_path(key), value) {
            tracing::warn!("failed to persist {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_preference_defaults_to_false() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ClientPrefs::new(dir.path());
        assert!(!prefs.location_enabled());
    }

    #[test]
    fn location_preference_roundtrips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        ClientPrefs::new(dir.path()).set_location_enabled(true);

        // a fresh instance over the same directory sees the stored value
        assert!(ClientPrefs::new(dir.path()).location_enabled());

        ClientPrefs::new(dir.path()).set_location_enabled(false);
        assert!(!ClientPrefs::new(dir.path()).location_enabled());
    }

    #[test]
    fn initial_query_is_consumed_once() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ClientPrefs::new(dir.path());
        prefs.store_initial_query("rat sightings this month");

        assert_eq!(
            prefs.take_initial_query().as_deref(),
            Some("rat sightings this month")
        );
        assert!(prefs.take_initial_query().is_none());
    }

    #[test]
    fn blank_initial_query_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = ClientPrefs::new(dir.path());
        prefs.store_initial_query("   ");
        assert!(prefs.take_initial_query().is_none());
    }
}
