//! Generated insights
//!
//! The backend summarizes each result with a title, a prose description,
//! and a filter description. The filter description arrives either as a
//! structured list of per-field entries or as one free-form sentence; both
//! shapes feed the filter pills.

use serde::{Deserialize, Serialize};

/// One structured filter description entry
///
/// The field name arrives under `filteredFieldName` or, in older payloads,
/// `field`; [`FilterEntry::field_name`] checks both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEntry {
    /// Physical name of the filtered field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_field_name: Option<String>,
    /// Legacy key for the filtered field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable description of the applied filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FilterEntry {
    /// Create an entry keyed by field name
    #[must_use]
    pub fn new(field_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            filtered_field_name: Some(field_name.into()),
            field: None,
            description: Some(description.into()),
        }
    }

    /// The filtered field name, preferring the current key over the legacy one
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.filtered_field_name
            .as_deref()
            .or(self.field.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

/// Filter description: structured entries or a single free-form sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterDescription {
    /// One entry per filtered field
    Entries(Vec<FilterEntry>),
    /// A single descriptive sentence covering all filters
    Text(String),
}

impl FilterDescription {
    /// The structured entries, when that is the shape present
    #[must_use]
    pub fn entries(&self) -> Option<&[FilterEntry]> {
        match self {
            Self::Entries(entries) => Some(entries),
            Self::Text(_) => None,
        }
    }

    /// True when neither entries nor non-blank text are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Entries(entries) => entries.is_empty(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl Default for FilterDescription {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

/// Insights generated for the current result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Panel title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Prose description of the data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_description: Option<String>,
    /// Filter descriptions in either wire shape
    #[serde(default)]
    pub filter_description: FilterDescription,
}
