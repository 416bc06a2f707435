//! Aggregation definitions
//!
//! The structured specification of a query's shape, returned by the backend
//! alongside results: which dimensions and measures, which filters, which
//! top-N limit, plus inline metadata for every referenced field.

use crate::metadata::{DataSourceInfo, FieldMetadata};
use serde::{Deserialize, Serialize};

/// A measure column: an aggregation applied under an output alias
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Output column alias, the lookup key against the schema measure list
    pub alias: String,
    /// Aggregation function (`count`, `sum`, `avg`, ...)
    #[serde(default)]
    pub aggregation_fn: String,
}

impl Measure {
    /// Create a measure
    #[inline]
    #[must_use]
    pub fn new(alias: impl Into<String>, aggregation_fn: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            aggregation_fn: aggregation_fn.into(),
        }
    }
}

/// Top-N limit: ordering keys plus the number of records to keep
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopN {
    /// Columns the limit orders by
    #[serde(default)]
    pub order_by_key: Vec<String>,
    /// Number of records to return
    pub top_n: u32,
}

/// The shape of one aggregated query
///
/// Every list field defaults to empty so a partial payload still
/// deserializes; the stores never see a half-populated definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationDefinition {
    /// Grouping dimensions, in display order
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Aggregated measures, in display order
    #[serde(default)]
    pub measures: Vec<Measure>,
    /// Row-level filter expression applied before aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_aggregation_filters: Option<String>,
    /// Filter expression applied after aggregation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_aggregation_filters: Option<String>,
    /// Dimensions classified as time
    #[serde(default)]
    pub time_dimension: Vec<String>,
    /// Dimensions classified as geographic
    #[serde(default)]
    pub geo_dimension: Vec<String>,
    /// Dimensions classified as categorical
    #[serde(default)]
    pub categorical_dimension: Vec<String>,
    /// Covered creation-date range as two `YYYY-MM-DD` endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_range: Option<Vec<String>>,
    /// Top-N limit, when the query carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<TopN>,
    /// Inline metadata for the data sources this query touches
    #[serde(default)]
    pub datasource_metadata: Vec<DataSourceInfo>,
    /// Inline metadata for the fields this query touches
    #[serde(default)]
    pub field_metadata: Vec<FieldMetadata>,
}

impl AggregationDefinition {
    /// Create an empty definition
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With grouping dimensions
    #[must_use]
    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    /// With measures
    #[must_use]
    pub fn with_measures(mut self, measures: Vec<Measure>) -> Self {
        self.measures = measures;
        self
    }

    /// With a creation-date range
    #[must_use]
    pub fn with_date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.created_date_range = Some(vec![start.into(), end.into()]);
        self
    }

    /// Names of all visible fields: dimensions then measure aliases
    #[must_use]
    pub fn visible_fields(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .cloned()
            .chain(self.measures.iter().map(|m| m.alias.clone()))
            .collect()
    }
}
