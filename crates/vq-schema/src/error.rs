//! Error types for schema loading
//!
//! Schema failures never cross the store boundary; this error exists for
//! the fetch internals and for logging.

/// Schema fetch/decode failure
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Request failed: connection, non-success status, or undecodable body
    #[error("schema request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
