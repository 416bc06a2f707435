//! Field and data-source metadata
//!
//! The schema document is the static catalog of known fields and data
//! sources. Dimensions are partitioned into three buckets (time, geo,
//! categorical); measures are a flat list. Keys (`physical_name`,
//! `data_source_id`) are unique within their collection.

use serde::{Deserialize, Serialize};

/// Metadata for a single field (dimension or measure)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Physical column name, the lookup key
    pub physical_name: String,
    /// Human-readable name shown in the UI
    #[serde(default)]
    pub display_name: String,
    /// Data type (`date`, `point`, `geo`, `string`, `integer`, `number`,
    /// `float`, `percentage`, ...)
    #[serde(default)]
    pub data_type: String,
    /// User-facing description for tooltips
    #[serde(default)]
    pub description_to_user: String,
    /// Owning data source, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    /// Alternative names the query translator accepts; unused by the
    /// description pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
}

impl FieldMetadata {
    /// Create metadata with the fields the pipeline reads
    #[must_use]
    pub fn new(
        physical_name: impl Into<String>,
        display_name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            physical_name: physical_name.into(),
            display_name: display_name.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    /// With user-facing description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_to_user = description.into();
        self
    }

    /// With owning data source
    #[must_use]
    pub fn with_data_source(mut self, data_source_id: impl Into<String>) -> Self {
        self.data_source_id = Some(data_source_id.into());
        self
    }
}

/// Metadata for a data source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataSourceInfo {
    /// Data source identifier, the lookup key
    pub data_source_id: String,
    /// Full data source name
    #[serde(default)]
    pub data_source_name: String,
    /// Short name for compact display
    #[serde(default)]
    pub data_source_short_name: String,
    /// User-facing description
    #[serde(default)]
    pub description_to_user: String,
    /// Link to the upstream source
    #[serde(default)]
    pub data_source_url: String,
}

/// Dimension metadata partitioned into the three schema buckets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionBuckets {
    /// Time dimensions (dates, weeks, months, dateparts)
    #[serde(default)]
    pub time_dimension: Vec<FieldMetadata>,
    /// Geographic dimensions (boroughs, zip codes, points)
    #[serde(default)]
    pub geo_dimension: Vec<FieldMetadata>,
    /// Everything else
    #[serde(default)]
    pub categorical_dimension: Vec<FieldMetadata>,
}

/// The field-metadata catalog fetched once per session
///
/// A missing or unfetchable document degrades to [`SchemaDocument::empty`];
/// lookups against the empty schema simply resolve nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Dimension buckets
    #[serde(default)]
    pub dimensions: DimensionBuckets,
    /// Flat measure list
    #[serde(default)]
    pub measures: Vec<FieldMetadata>,
    /// Known data sources
    #[serde(default)]
    pub data_sources: Vec<DataSourceInfo>,
}

impl SchemaDocument {
    /// The well-defined empty schema used when loading fails
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the document carries any field metadata at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.time_dimension.is_empty()
            && self.dimensions.geo_dimension.is_empty()
            && self.dimensions.categorical_dimension.is_empty()
            && self.measures.is_empty()
    }
}
