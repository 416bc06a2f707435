//! Backend query request
//!
//! The POST body sent to the query endpoint: the user's prompt, the current
//! visualization plus conversation history as context, and (when the user
//! opted in and a fix was obtained) a coarse location.

use crate::aggregation::{Measure, TopN};
use crate::result::QueryResult;
use serde::{Deserialize, Serialize};

/// One prior exchange, replayed as conversational context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    /// The user's query
    pub query: String,
    /// The backend's text answer for that query
    pub response_text: String,
}

impl ConversationTurn {
    /// Create a turn
    #[inline]
    #[must_use]
    pub fn new(query: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response_text: response_text.into(),
        }
    }
}

/// The visualization currently on screen, summarized for the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentVisualization {
    /// Active chart type
    pub chart_type: String,
    /// Grouping dimensions
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Aggregated measures
    #[serde(default)]
    pub measures: Vec<Measure>,
    /// Pre-aggregation filter expression, empty when none
    #[serde(default)]
    pub pre_aggregation_filters: String,
    /// Post-aggregation filter expression, empty when none
    #[serde(default)]
    pub post_aggregation_filters: String,
    /// Top-N limit, when one applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<TopN>,
}

impl CurrentVisualization {
    /// Summarize the canonical result for the next request's context
    #[must_use]
    pub fn from_result(result: &QueryResult) -> Self {
        let agg = &result.aggregation;
        Self {
            chart_type: result.chart_type.clone(),
            dimensions: agg.dimensions.clone(),
            measures: agg.measures.clone(),
            pre_aggregation_filters: agg.pre_aggregation_filters.clone().unwrap_or_default(),
            post_aggregation_filters: agg.post_aggregation_filters.clone().unwrap_or_default(),
            top_n: agg.top_n.clone(),
        }
    }
}

/// Conversational context sent with every query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    /// What is currently rendered
    pub current_visualization: CurrentVisualization,
    /// Prior turns, oldest first
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    /// Whether the user has enabled location services
    #[serde(default)]
    pub location_enabled: bool,
}

/// A device location fix
///
/// Coordinates are coarsened to 3 decimal places (about a city block)
/// before leaving the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point
    #[inline]
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Round both coordinates to 3 decimal places
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            latitude: (self.latitude * 1000.0).round() / 1000.0,
            longitude: (self.longitude * 1000.0).round() / 1000.0,
        }
    }
}

/// The full query request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// The user's natural-language prompt
    pub prompt: String,
    /// Conversational context
    pub context: QueryContext,
    /// Coarse location, present only when enabled and acquired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl QueryRequest {
    /// Create a request with empty context
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: QueryContext::default(),
            location: None,
        }
    }

    /// With context
    #[must_use]
    pub fn with_context(mut self, context: QueryContext) -> Self {
        self.context = context;
        self
    }

    /// With a location fix, coarsened on the way in
    #[must_use]
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location.rounded());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn geo_point_rounds_to_three_decimals() {
        let point = GeoPoint::new(40.712_776, -74.005_974).rounded();
        assert_eq!(point.latitude, 40.713);
        assert_eq!(point.longitude, -74.006);
    }

    #[test]
    fn request_serializes_wire_keys() {
        let request = QueryRequest::new("noise complaints in brooklyn")
            .with_context(QueryContext {
                current_visualization: CurrentVisualization {
                    chart_type: "bar".into(),
                    ..CurrentVisualization::default()
                },
                conversation_history: vec![ConversationTurn::new("hi", "hello")],
                location_enabled: true,
            })
            .with_location(GeoPoint::new(40.7127, -74.0059));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["context"]["currentVisualization"]["chartType"], "bar");
        assert_eq!(json["context"]["conversationHistory"][0]["responseText"], "hello");
        assert_eq!(json["context"]["locationEnabled"], true);
        assert_eq!(json["location"]["latitude"], 40.713);
    }

    #[test]
    fn location_key_absent_without_fix() {
        let json = serde_json::to_value(QueryRequest::new("anything")).unwrap();
        assert!(json.get("location").is_none());
    }

    #[test]
    fn visualization_summary_reflects_result() {
        let mut result = QueryResult::default();
        result.chart_type = "line".into();
        result.aggregation.dimensions = vec!["created_week".into()];
        result.aggregation.pre_aggregation_filters = Some("borough = 'QUEENS'".into());

        let viz = CurrentVisualization::from_result(&result);
        assert_eq!(viz.chart_type, "line");
        assert_eq!(viz.dimensions, vec!["created_week"]);
        assert_eq!(viz.pre_aggregation_filters, "borough = 'QUEENS'");
        assert_eq!(viz.post_aggregation_filters, "");
    }
}
