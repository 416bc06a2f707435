//! Error types for the client layer
//!
//! Transport failures stop a query without touching the stored result; the
//! session logs them and the user sees the previous visualization intact.

/// Query submission failure
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request failed: connection, non-success status, or undecodable body
    #[error("query request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Location acquisition failure
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The device could not produce a fix
    #[error("location unavailable: {0}")]
    Unavailable(String),
    /// Permission to read the location was denied
    #[error("location permission denied")]
    PermissionDenied,
}
