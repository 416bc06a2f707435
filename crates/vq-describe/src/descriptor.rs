//! Pill descriptors and section views

use vq_schema::Icon;

/// The four About Data sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Covered time period
    Period,
    /// Grouping attributes
    Attributes,
    /// Aggregated measures
    Measures,
    /// Applied filters
    Filters,
}

impl SectionKind {
    /// Stable section id consumed by the presentation layer
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Period => "period",
            SectionKind::Attributes => "attributes",
            SectionKind::Measures => "measures",
            SectionKind::Filters => "filters",
        }
    }
}

/// One labeled chip with hover-triggered explanatory text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillDescriptor {
    /// Display glyph
    pub icon: Icon,
    /// Chip label
    pub label: String,
    /// Tooltip heading
    pub tooltip_title: String,
    /// Tooltip body; a source sub-line may follow on its own line
    pub tooltip_body: String,
    /// Style hook for the presentation layer
    pub style_class: &'static str,
}

/// One derived section: its pills, or a placeholder when none apply
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Which section this is
    pub kind: SectionKind,
    /// Pills in display order
    pub pills: Vec<PillDescriptor>,
    /// Empty-state marker, set exactly when `pills` is empty
    pub placeholder: Option<&'static str>,
}

impl SectionView {
    /// Build a view, substituting the empty-state marker for an empty list
    #[must_use]
    pub fn of(kind: SectionKind, pills: Vec<PillDescriptor>, empty_marker: &'static str) -> Self {
        let placeholder = pills.is_empty().then_some(empty_marker);
        Self {
            kind,
            pills,
            placeholder,
        }
    }

    /// Whether the section fell into its empty state
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }
}

/// The full derived About Data panel
#[derive(Debug, Clone, PartialEq)]
pub struct AboutData {
    /// Covered time period
    pub period: SectionView,
    /// Grouping attributes
    pub attributes: SectionView,
    /// Aggregated measures
    pub measures: SectionView,
    /// Applied filters
    pub filters: SectionView,
}

impl AboutData {
    /// The sections in display order
    #[must_use]
    pub fn sections(&self) -> [&SectionView; 4] {
        [&self.period, &self.attributes, &self.measures, &self.filters]
    }
}
