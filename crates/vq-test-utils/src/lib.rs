//! Testing utilities for the VizQuery workspace
//!
//! Shared fixtures: a populated schema document, canned aggregation
//! definitions and responses, and a recording panel implementing both
//! render ports.

#![allow(missing_docs)]

use vq_describe::{ChartPort, RenderPort, SectionView};
use vq_model::{
    AggregationDefinition, DataSourceInfo, DimensionBuckets, FieldMetadata, FilterDescription,
    FilterEntry, Insights, Measure, QueryResponse, QueryResult, SchemaDocument,
};

/// A schema covering the field shapes the pipeline distinguishes:
/// time/geo/categorical dimensions, integer and percentage measures, and a
/// resolvable data source.
pub fn sample_schema() -> SchemaDocument {
    SchemaDocument {
        dimensions: DimensionBuckets {
            time_dimension: vec![
                FieldMetadata::new("created_date", "Created Date", "date")
                    .with_description("When the request was created"),
                FieldMetadata::new("created_week", "Created Week", "date"),
            ],
            geo_dimension: vec![
                FieldMetadata::new("boro", "Borough", "string")
                    .with_description("The borough where the request originated")
                    .with_data_source("nyc311"),
                FieldMetadata::new("location", "Location", "point"),
            ],
            categorical_dimension: vec![FieldMetadata::new(
                "complaint_type",
                "Complaint Type",
                "string",
            )
            .with_description("The category of the complaint")],
        },
        measures: vec![
            FieldMetadata::new("num_requests", "Requests", "integer")
                .with_description("Number of service requests")
                .with_data_source("nyc311"),
            FieldMetadata::new("pct_closed", "Closed Rate", "percentage"),
            FieldMetadata::new("avg_days_to_close", "Days to Close", "float"),
        ],
        data_sources: vec![DataSourceInfo {
            data_source_id: "nyc311".into(),
            data_source_name: "311 Service Requests".into(),
            data_source_short_name: "311".into(),
            description_to_user: "Service requests reported to 311".into(),
            data_source_url: "https://example.org/311".into(),
        }],
    }
}

/// A borough-by-requests aggregation with a date range and one filter
pub fn sample_aggregation() -> AggregationDefinition {
    AggregationDefinition::new()
        .with_dimensions(["boro"])
        .with_measures(vec![Measure::new("num_requests", "count")])
        .with_date_range("2024-03-01", "2024-03-15")
}

/// Insights with one structured filter entry
pub fn sample_insights() -> Insights {
    Insights {
        title: Some("Requests by borough".into()),
        data_description: Some("Service requests grouped by borough.".into()),
        filter_description: FilterDescription::Entries(vec![FilterEntry::new(
            "boro",
            "Only Brooklyn",
        )]),
    }
}

/// A full response payload around [`sample_aggregation`]
pub fn sample_response() -> QueryResponse {
    QueryResponse {
        fields: Some(vec!["boro".into(), "num_requests".into()]),
        dataset: Some(vec![serde_json::from_str(
            r#"{"boro": "Brooklyn", "num_requests": 42}"#,
        )
        .unwrap()]),
        aggregation_definition: Some(sample_aggregation()),
        sql: Some("SELECT boro, count(*) FROM requests GROUP BY boro".into()),
        chart_type: Some("bar".into()),
        available_chart_types: Some(vec!["bar".into(), "table".into()]),
        text_response: None,
        data_insights: Some(sample_insights()),
        schema_metadata: None,
        data_metadata_all: None,
    }
}

/// Render-port double that records everything pushed through it
#[derive(Debug, Default)]
pub struct RecordingPanel {
    /// Section views in render order
    pub sections: Vec<SectionView>,
    /// Results handed to the chart port
    pub charts: Vec<QueryResult>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section kinds rendered so far, as stable ids
    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|view| view.kind.as_str()).collect()
    }
}

impl RenderPort for RecordingPanel {
    fn render_section(&mut self, view: &SectionView) {
        self.sections.push(view.clone());
    }
}

impl ChartPort for RecordingPanel {
    fn render_chart(&mut self, result: &QueryResult) {
        self.charts.push(result.clone());
    }
}
