//! VizQuery descriptor builder
//!
//! Pure derivation of the "About Data" panel from the current result and
//! the schema:
//! - [`build_about`]: produces the four pill sections (period, attributes,
//!   measures, filters), each with an empty-state marker when nothing
//!   applies
//! - [`PillDescriptor`]: plain derived values (icon, label, tooltip),
//!   ephemeral and never persisted
//! - [`RenderPort`] / [`ChartPort`]: the narrow seams the presentation
//!   layer implements; the builder has zero dependency on any presentation
//!   technology
//!
//! For fixed inputs the output is identical on every call.

#![warn(unreachable_pub)]

// Core modules
pub mod builder;
pub mod descriptor;
pub mod port;

// Re-exports for convenience
pub use builder::{
    build_about, NO_ATTRIBUTES, NO_FILTERS, NO_MEASURES, NO_PERIOD,
};
pub use descriptor::{AboutData, PillDescriptor, SectionKind, SectionView};
pub use port::{ChartPort, RenderPort};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the descriptor builder
    pub use crate::{
        build_about, AboutData, ChartPort, PillDescriptor, RenderPort, SectionKind, SectionView,
    };
}
