//! Icon policy
//!
//! Pure mapping from a field's `data_type` to the glyph its pill shows.
//! Matching is case-insensitive; a missing type counts as `string` for
//! dimensions and `number` for measures.

/// Display glyph for a pill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Date and other time fields
    Calendar,
    /// Geographic fields
    Location,
    /// Free-text fields
    Text,
    /// Integer-valued fields
    Tag,
    /// Aggregated numeric measures
    Aggregate,
    /// Percentage measures
    Percent,
    /// Generic fallback for unrecognized dimension types
    Label,
    /// Filter pills
    Filter,
}

impl Icon {
    /// Stable glyph name consumed by the presentation layer
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Calendar => "calendar",
            Icon::Location => "location",
            Icon::Text => "text",
            Icon::Tag => "tag",
            Icon::Aggregate => "aggregate",
            Icon::Percent => "percent",
            Icon::Label => "label",
            Icon::Filter => "filter",
        }
    }
}

/// Icon for a dimension field of the given `data_type`
///
/// Pass `"string"` when the field resolved without a type.
#[must_use]
pub fn dimension_icon(data_type: &str) -> Icon {
    match data_type.trim().to_ascii_lowercase().as_str() {
        "date" => Icon::Calendar,
        "point" | "geo" => Icon::Location,
        "string" => Icon::Text,
        "integer" | "number" | "float" => Icon::Tag,
        _ => Icon::Label,
    }
}

/// Icon for a measure of the given `data_type`
///
/// Pass `"number"` when the measure resolved without a type.
#[must_use]
pub fn measure_icon(data_type: &str) -> Icon {
    match data_type.trim().to_ascii_lowercase().as_str() {
        "integer" => Icon::Tag,
        "percentage" => Icon::Percent,
        _ => Icon::Aggregate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_icons_follow_type_table() {
        assert_eq!(dimension_icon("date"), Icon::Calendar);
        assert_eq!(dimension_icon("point"), Icon::Location);
        assert_eq!(dimension_icon("geo"), Icon::Location);
        assert_eq!(dimension_icon("string"), Icon::Text);
        assert_eq!(dimension_icon("integer"), Icon::Tag);
        assert_eq!(dimension_icon("number"), Icon::Tag);
        assert_eq!(dimension_icon("float"), Icon::Tag);
        assert_eq!(dimension_icon("something_else"), Icon::Label);
    }

    #[test]
    fn measure_icons_follow_type_table() {
        assert_eq!(measure_icon("integer"), Icon::Tag);
        assert_eq!(measure_icon("number"), Icon::Aggregate);
        assert_eq!(measure_icon("float"), Icon::Aggregate);
        assert_eq!(measure_icon("percentage"), Icon::Percent);
        assert_eq!(measure_icon("mystery"), Icon::Aggregate);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(dimension_icon("DATE"), Icon::Calendar);
        assert_eq!(dimension_icon(" Geo "), Icon::Location);
        assert_eq!(measure_icon("Percentage"), Icon::Percent);
    }
}
