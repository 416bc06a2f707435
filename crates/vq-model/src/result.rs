//! Query results
//!
//! [`QueryResponse`] is the wire payload: every field optional, exactly as
//! the backend sends it. [`QueryResult`] is the canonical in-memory value:
//! every field present, with absent wire fields replaced by fixed defaults.
//! The conversion is a full logical replace per field, never a deep merge.

use crate::aggregation::AggregationDefinition;
use crate::insights::Insights;
use crate::metadata::SchemaDocument;
use serde::{Deserialize, Serialize};

/// One dataset row, keyed by field name
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Chart type used when the payload does not name one
pub const DEFAULT_CHART_TYPE: &str = "table";

/// Raw backend response; all fields optional on the wire
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Visible field names, dimensions before measures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Result rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Vec<Row>>,
    /// Shape of the aggregation that produced the rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_definition: Option<AggregationDefinition>,
    /// SQL the backend executed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    /// Recommended chart type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    /// Chart types the result can render as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_chart_types: Option<Vec<String>>,
    /// Direct text answer, for conversational replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_response: Option<String>,
    /// Generated insights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_insights: Option<Insights>,
    /// Schema snapshot under its older wire key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_metadata: Option<SchemaDocument>,
    /// Snapshot of the full schema document, when the backend includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_metadata_all: Option<SchemaDocument>,
}

/// The canonical current query result
///
/// Created from each successful response; fully replaces the previous value.
/// Immutable once stored except through the result store's update.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Visible field names
    pub fields: Vec<String>,
    /// Result rows
    pub dataset: Vec<Row>,
    /// Aggregation shape
    pub aggregation: AggregationDefinition,
    /// Executed SQL
    pub sql: String,
    /// Active chart type
    pub chart_type: String,
    /// Chart types available for this result
    pub available_chart_types: Vec<String>,
    /// Direct text answer, when present
    pub text_response: Option<String>,
    /// Generated insights
    pub insights: Insights,
    /// Schema snapshot carried with the response, when present
    pub schema_snapshot: Option<SchemaDocument>,
}

impl Default for QueryResult {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            dataset: Vec::new(),
            aggregation: AggregationDefinition::default(),
            sql: String::new(),
            chart_type: DEFAULT_CHART_TYPE.to_string(),
            available_chart_types: Vec::new(),
            text_response: None,
            insights: Insights::default(),
            schema_snapshot: None,
        }
    }
}

impl From<QueryResponse> for QueryResult {
    /// Apply the or-default rule: absent wire fields become fixed defaults,
    /// never leftovers from a previous result.
    fn from(response: QueryResponse) -> Self {
        Self {
            fields: response.fields.unwrap_or_default(),
            dataset: response.dataset.unwrap_or_default(),
            aggregation: response.aggregation_definition.unwrap_or_default(),
            sql: response.sql.unwrap_or_default(),
            chart_type: response
                .chart_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CHART_TYPE.to_string()),
            available_chart_types: response.available_chart_types.unwrap_or_default(),
            text_response: response.text_response.filter(|text| !text.is_empty()),
            insights: response.data_insights.unwrap_or_default(),
            schema_snapshot: response.data_metadata_all.or(response.schema_metadata),
        }
    }
}
