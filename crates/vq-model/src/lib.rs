//! VizQuery data model
//!
//! Shared types for the client core:
//! - Backend wire payloads (query request and response)
//! - Aggregation definitions (dimensions, measures, filters, top-N)
//! - Field and data-source metadata
//! - Generated insights (title, description, filter descriptions)
//!
//! Wire types carry the exact JSON names the backend uses: `camelCase` for
//! payload keys, `snake_case` for schema-document keys.

#![warn(unreachable_pub)]

// Core modules
pub mod aggregation;
pub mod insights;
pub mod metadata;
pub mod request;
pub mod result;

// Re-exports for convenience
pub use aggregation::{AggregationDefinition, Measure, TopN};
pub use insights::{FilterDescription, FilterEntry, Insights};
pub use metadata::{DataSourceInfo, DimensionBuckets, FieldMetadata, SchemaDocument};
pub use request::{ConversationTurn, CurrentVisualization, GeoPoint, QueryContext, QueryRequest};
pub use result::{QueryResponse, QueryResult, Row, DEFAULT_CHART_TYPE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the VizQuery model
    pub use crate::{
        AggregationDefinition, DataSourceInfo, FieldMetadata, FilterDescription, FilterEntry,
        GeoPoint, Insights, Measure, QueryRequest, QueryResponse, QueryResult, SchemaDocument,
    };
}
