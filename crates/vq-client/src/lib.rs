//! VizQuery backend client and session
//!
//! The outermost layer of the client core:
//! - [`QueryClient`]: typed POST to the backend query endpoint
//! - [`LocationProvider`]: the geolocation boundary, wrapped in a fixed
//!   timeout with fallback to "no location"
//! - [`ExplorerSession`]: ties store, schema, builder, and render ports
//!   together for the ask → apply → describe → render cycle, with a
//!   ticket guard dropping stale responses

#![warn(unreachable_pub)]

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod session;

// Re-exports for convenience
pub use client::QueryClient;
pub use config::SessionConfig;
pub use error::{ClientError, LocationError};
pub use location::{acquire_location, LocationProvider};
pub use session::ExplorerSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the VizQuery client
    pub use crate::{
        acquire_location, ClientError, ExplorerSession, LocationProvider, QueryClient,
        SessionConfig,
    };
}
