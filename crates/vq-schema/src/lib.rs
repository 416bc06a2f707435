//! VizQuery schema store and field resolver
//!
//! Turns raw field identifiers into human-readable metadata:
//! - [`SchemaStore`]: fetches the schema document once and serves it from a
//!   single-slot cache, degrading to the empty schema on failure
//! - Resolver functions: bucket-ordered lookups by physical name, linear
//!   scan, first match wins, never an error
//! - [`Icon`] policy: a pure mapping from `data_type` to display glyph

#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod icon;
pub mod resolve;
pub mod store;

// Re-exports for convenience
pub use error::SchemaError;
pub use icon::{dimension_icon, measure_icon, Icon};
pub use resolve::{resolve_any, resolve_data_source, resolve_dimension, resolve_measure};
pub use store::SchemaStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
