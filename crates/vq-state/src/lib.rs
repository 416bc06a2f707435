//! VizQuery client state
//!
//! The single sources of truth the rest of the client reads:
//! - [`ResultStore`]: the canonical latest query result, replaced wholesale
//!   on each applied response, with a ticket guard against stale arrivals
//!   and a capped conversation history
//! - [`ClientPrefs`]: the persisted location preference and the one-shot
//!   initial-query hand-off
//!
//! Stores are plain owned objects so tests construct isolated instances.

#![warn(unreachable_pub)]

// Core modules
pub mod prefs;
pub mod store;

// Re-exports for convenience
pub use prefs::ClientPrefs;
pub use store::{ResultStore, Ticket, DEFAULT_HISTORY_LIMIT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
