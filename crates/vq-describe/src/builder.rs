//! About Data derivation
//!
//! Composes the pill descriptor lists for the four panel sections from the
//! current aggregation definition, insights, and schema. Everything here is
//! a pure function of its inputs: unresolvable names fall back to the raw
//! identifier, malformed date ranges fall into the empty state, and nothing
//! errors or panics.

use crate::descriptor::{AboutData, PillDescriptor, SectionKind, SectionView};
use chrono::NaiveDate;
use indexmap::IndexSet;
use vq_model::{
    AggregationDefinition, FilterDescription, FilterEntry, Insights, SchemaDocument,
};
use vq_schema::{
    dimension_icon, measure_icon, resolve_any, resolve_data_source, resolve_dimension,
    resolve_measure, Icon,
};

/// Empty-state marker for the period section
pub const NO_PERIOD: &str = "No time period specified";
/// Empty-state marker for the attributes section
pub const NO_ATTRIBUTES: &str = "No attributes in this visualization";
/// Empty-state marker for the measures section
pub const NO_MEASURES: &str = "No measures in this visualization";
/// Empty-state marker for the filters section
pub const NO_FILTERS: &str = "No filters applied";

const PERIOD_CLASS: &str = "period-pill";
const ATTRIBUTE_CLASS: &str = "attribute-pill";
const MEASURE_CLASS: &str = "measure-pill";
const FILTER_CLASS: &str = "filter-pill";

/// Derive the full About Data panel
#[must_use]
pub fn build_about(
    aggregation: &AggregationDefinition,
    insights: &Insights,
    schema: &SchemaDocument,
) -> AboutData {
    AboutData {
        period: period_section(aggregation.created_date_range.as_deref()),
        attributes: attributes_section(aggregation, schema),
        measures: measures_section(aggregation, schema),
        filters: filters_section(aggregation, insights, schema),
    }
}

// --- period ---

fn period_section(range: Option<&[String]>) -> SectionView {
    let pills = parse_endpoints(range)
        .map(|(start, end)| {
            vec![PillDescriptor {
                icon: Icon::Calendar,
                label: format!("{} - {}", short_date(start), short_date(end)),
                tooltip_title: "Time period".to_string(),
                tooltip_body: format!(
                    "Data covers requests created between {} and {}",
                    long_date(start),
                    long_date(end)
                ),
                style_class: PERIOD_CLASS,
            }]
        })
        .unwrap_or_default();

    SectionView::of(SectionKind::Period, pills, NO_PERIOD)
}

/// Parse the two range endpoints as plain year-month-day components.
/// No timestamps, no timezone conversion: the rendered day is the stored
/// day in every host timezone.
fn parse_endpoints(range: Option<&[String]>) -> Option<(NaiveDate, NaiveDate)> {
    let range = range?;
    let start = parse_date(range.first()?)?;
    let end = parse_date(range.get(1)?)?;
    Some((start, end))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// --- attributes ---

fn attributes_section(aggregation: &AggregationDefinition, schema: &SchemaDocument) -> SectionView {
    // dedup, first occurrence wins
    let names: IndexSet<&str> = aggregation.dimensions.iter().map(String::as_str).collect();
    let pills = names
        .iter()
        .map(|name| attribute_pill(name, aggregation, schema))
        .collect();

    SectionView::of(SectionKind::Attributes, pills, NO_ATTRIBUTES)
}

fn attribute_pill(
    name: &str,
    aggregation: &AggregationDefinition,
    schema: &SchemaDocument,
) -> PillDescriptor {
    let meta = resolve_dimension(name, schema);
    let label = meta
        .and_then(|m| non_empty(&m.display_name))
        .unwrap_or(name)
        .to_string();
    let icon = dimension_icon(
        meta.and_then(|m| non_empty(&m.data_type))
            .unwrap_or("string"),
    );
    let mut body = meta
        .and_then(|m| non_empty(&m.description_to_user))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{name} attribute"));
    append_source_note(&mut body, meta, aggregation, schema);

    PillDescriptor {
        icon,
        label: label.clone(),
        tooltip_title: label,
        tooltip_body: body,
        style_class: ATTRIBUTE_CLASS,
    }
}

// --- measures ---

fn measures_section(aggregation: &AggregationDefinition, schema: &SchemaDocument) -> SectionView {
    let aliases: IndexSet<&str> = aggregation
        .measures
        .iter()
        .map(|m| m.alias.as_str())
        .collect();
    let pills = aliases
        .iter()
        .map(|alias| measure_pill(alias, aggregation, schema))
        .collect();

    SectionView::of(SectionKind::Measures, pills, NO_MEASURES)
}

fn measure_pill(
    alias: &str,
    aggregation: &AggregationDefinition,
    schema: &SchemaDocument,
) -> PillDescriptor {
    let meta = resolve_measure(alias, schema);
    let label = meta
        .and_then(|m| non_empty(&m.display_name))
        .unwrap_or(alias)
        .to_string();
    let icon = measure_icon(
        meta.and_then(|m| non_empty(&m.data_type))
            .unwrap_or("number"),
    );
    let mut body = meta
        .and_then(|m| non_empty(&m.description_to_user))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{alias} measure"));
    append_source_note(&mut body, meta, aggregation, schema);

    PillDescriptor {
        icon,
        label: label.clone(),
        tooltip_title: label,
        tooltip_body: body,
        style_class: MEASURE_CLASS,
    }
}

/// Append `Source: <name>` when the resolved field names a data source
/// known to either the inline response metadata or the schema document.
fn append_source_note(
    body: &mut String,
    meta: Option<&vq_model::FieldMetadata>,
    aggregation: &AggregationDefinition,
    schema: &SchemaDocument,
) {
    let Some(id) = meta.and_then(|m| m.data_source_id.as_deref()) else {
        return;
    };
    let source = resolve_data_source(id, &aggregation.datasource_metadata)
        .or_else(|| resolve_data_source(id, &schema.data_sources));
    if let Some(source_name) = source.and_then(|s| non_empty(&s.data_source_name)) {
        body.push('\n');
        body.push_str("Source: ");
        body.push_str(source_name);
    }
}

// --- filters ---

fn filters_section(
    aggregation: &AggregationDefinition,
    insights: &Insights,
    schema: &SchemaDocument,
) -> SectionView {
    let mut pills = Vec::new();

    match &insights.filter_description {
        FilterDescription::Entries(entries) => {
            pills.extend(entries.iter().map(|entry| entry_pill(entry, schema)));
        }
        FilterDescription::Text(text) => {
            if let Some(text) = non_empty(text) {
                pills.push(text_filter_pill(text));
            }
        }
    }

    // raw pre-aggregation text is a fallback, never a duplicate of the
    // described filters above
    if pills.is_empty() {
        if let Some(pre) = aggregation
            .pre_aggregation_filters
            .as_deref()
            .and_then(non_empty)
        {
            pills.push(text_filter_pill(pre));
        }
    }

    // post-aggregation text always renders, after everything else
    if let Some(post) = aggregation
        .post_aggregation_filters
        .as_deref()
        .and_then(non_empty)
    {
        pills.push(text_filter_pill(post));
    }

    SectionView::of(SectionKind::Filters, pills, NO_FILTERS)
}

fn entry_pill(entry: &FilterEntry, schema: &SchemaDocument) -> PillDescriptor {
    let body = entry
        .description
        .as_deref()
        .and_then(non_empty)
        .unwrap_or("Applied filter")
        .to_string();

    match entry.field_name() {
        Some(name) => {
            let label = resolve_any(name, schema)
                .and_then(|m| non_empty(&m.display_name))
                .unwrap_or(name)
                .to_string();
            PillDescriptor {
                icon: Icon::Filter,
                label: label.clone(),
                tooltip_title: label,
                tooltip_body: body,
                style_class: FILTER_CLASS,
            }
        }
        None => text_filter_pill(&body),
    }
}

fn text_filter_pill(text: &str) -> PillDescriptor {
    PillDescriptor {
        icon: Icon::Filter,
        label: "Filter".to_string(),
        tooltip_title: "Filter".to_string(),
        tooltip_body: text.to_string(),
        style_class: FILTER_CLASS,
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vq_model::{DataSourceInfo, DimensionBuckets, FieldMetadata, Measure};

    fn schema() -> SchemaDocument {
        SchemaDocument {
            dimensions: DimensionBuckets {
                time_dimension: vec![FieldMetadata::new("created_date", "Created Date", "date")
                    .with_description("When the request was created")],
                geo_dimension: vec![FieldMetadata::new("boro", "Borough", "string")
                    .with_description("The borough where the request originated")
                    .with_data_source("nyc311")],
                categorical_dimension: vec![FieldMetadata::new(
                    "complaint_type",
                    "Complaint Type",
                    "string",
                )],
            },
            measures: vec![
                FieldMetadata::new("num_requests", "Requests", "integer"),
                FieldMetadata::new("pct_closed", "Closed Rate", "percentage"),
            ],
            data_sources: vec![DataSourceInfo {
                data_source_id: "nyc311".into(),
                data_source_name: "311 Service Requests".into(),
                ..DataSourceInfo::default()
            }],
        }
    }

    #[test]
    fn period_label_and_tooltip_format() {
        let agg = AggregationDefinition::new().with_date_range("2024-03-01", "2024-03-15");
        let about = build_about(&agg, &Insights::default(), &schema());

        let pill = &about.period.pills[0];
        assert_eq!(pill.label, "Mar 1, 2024 - Mar 15, 2024");
        assert!(pill.tooltip_body.contains("March 1, 2024"));
        assert!(pill.tooltip_body.contains("March 15, 2024"));
        assert_eq!(pill.icon, Icon::Calendar);
    }

    #[test]
    fn malformed_range_falls_into_empty_state() {
        for range in [
            None,
            Some(vec![]),
            Some(vec!["2024-03-01".to_string()]),
            Some(vec!["2024-03-01".to_string(), String::new()]),
            Some(vec!["not-a-date".to_string(), "2024-03-15".to_string()]),
        ] {
            let mut agg = AggregationDefinition::new();
            agg.created_date_range = range;
            let about = build_about(&agg, &Insights::default(), &schema());
            assert!(about.period.is_empty());
            assert_eq!(about.period.placeholder, Some(NO_PERIOD));
        }
    }

    #[test]
    fn duplicate_dimensions_collapse_in_first_occurrence_order() {
        let agg = AggregationDefinition::new().with_dimensions([
            "boro",
            "complaint_type",
            "boro",
            "created_date",
            "complaint_type",
        ]);
        let about = build_about(&agg, &Insights::default(), &schema());

        let labels: Vec<&str> = about
            .attributes
            .pills
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Borough", "Complaint Type", "Created Date"]);
    }

    #[test]
    fn unknown_dimension_keeps_raw_name_with_generic_description() {
        let agg = AggregationDefinition::new().with_dimensions(["xyz_unknown"]);
        let about = build_about(&agg, &Insights::default(), &schema());

        let pill = &about.attributes.pills[0];
        assert_eq!(pill.label, "xyz_unknown");
        assert_eq!(pill.tooltip_body, "xyz_unknown attribute");
        assert_eq!(pill.icon, Icon::Text);
    }

    #[test]
    fn attribute_tooltip_carries_source_note() {
        let agg = AggregationDefinition::new().with_dimensions(["boro"]);
        let about = build_about(&agg, &Insights::default(), &schema());

        let pill = &about.attributes.pills[0];
        assert!(pill.tooltip_body.contains("Source: 311 Service Requests"));
    }

    #[test]
    fn measure_icons_and_fallbacks() {
        let agg = AggregationDefinition::new().with_measures(vec![
            Measure::new("num_requests", "count"),
            Measure::new("pct_closed", "avg"),
            Measure::new("mystery_metric", "sum"),
        ]);
        let about = build_about(&agg, &Insights::default(), &schema());

        assert_eq!(about.measures.pills[0].icon, Icon::Tag);
        assert_eq!(about.measures.pills[1].icon, Icon::Percent);
        let fallback = &about.measures.pills[2];
        assert_eq!(fallback.icon, Icon::Aggregate);
        assert_eq!(fallback.label, "mystery_metric");
        assert_eq!(fallback.tooltip_body, "mystery_metric measure");
    }

    #[test]
    fn filter_entry_resolves_label_and_keeps_description() {
        let insights = Insights {
            filter_description: FilterDescription::Entries(vec![FilterEntry::new(
                "boro",
                "Only Brooklyn",
            )]),
            ..Insights::default()
        };
        let about = build_about(&AggregationDefinition::new(), &insights, &schema());

        let pill = &about.filters.pills[0];
        assert_eq!(pill.label, "Borough");
        assert_eq!(pill.tooltip_body, "Only Brooklyn");
    }

    #[test]
    fn string_filter_description_emits_single_generic_pill() {
        let insights = Insights {
            filter_description: FilterDescription::Text("Limited to 2024 requests".into()),
            ..Insights::default()
        };
        let about = build_about(&AggregationDefinition::new(), &insights, &schema());

        assert_eq!(about.filters.pills.len(), 1);
        assert_eq!(about.filters.pills[0].label, "Filter");
        assert_eq!(about.filters.pills[0].tooltip_body, "Limited to 2024 requests");
    }

    #[test]
    fn pre_filter_text_renders_only_without_structured_entries() {
        let mut agg = AggregationDefinition::new();
        agg.pre_aggregation_filters = Some("borough = 'BROOKLYN'".into());

        let no_entries = build_about(&agg, &Insights::default(), &schema());
        assert_eq!(no_entries.filters.pills.len(), 1);
        assert_eq!(no_entries.filters.pills[0].tooltip_body, "borough = 'BROOKLYN'");

        let insights = Insights {
            filter_description: FilterDescription::Entries(vec![FilterEntry::new(
                "boro",
                "Only Brooklyn",
            )]),
            ..Insights::default()
        };
        let with_entries = build_about(&agg, &insights, &schema());
        assert_eq!(with_entries.filters.pills.len(), 1);
        assert_eq!(with_entries.filters.pills[0].label, "Borough");
    }

    #[test]
    fn post_filter_text_always_renders_last() {
        let mut agg = AggregationDefinition::new();
        agg.post_aggregation_filters = Some("num_requests > 100".into());
        let insights = Insights {
            filter_description: FilterDescription::Entries(vec![FilterEntry::new(
                "boro",
                "Only Brooklyn",
            )]),
            ..Insights::default()
        };

        let about = build_about(&agg, &insights, &schema());
        assert_eq!(about.filters.pills.len(), 2);
        assert_eq!(about.filters.pills[1].label, "Filter");
        assert_eq!(about.filters.pills[1].tooltip_body, "num_requests > 100");
    }

    #[test]
    fn empty_definition_renders_all_empty_states() {
        let about = build_about(
            &AggregationDefinition::new(),
            &Insights::default(),
            &schema(),
        );

        assert_eq!(about.period.placeholder, Some(NO_PERIOD));
        assert_eq!(about.attributes.placeholder, Some(NO_ATTRIBUTES));
        assert_eq!(about.measures.placeholder, Some(NO_MEASURES));
        assert_eq!(about.filters.placeholder, Some(NO_FILTERS));
        assert!(about.attributes.pills.is_empty());
        assert!(about.measures.pills.is_empty());
    }

    #[test]
    fn output_is_deterministic() {
        let agg = AggregationDefinition::new()
            .with_dimensions(["boro", "created_date"])
            .with_measures(vec![Measure::new("num_requests", "count")])
            .with_date_range("2024-01-01", "2024-06-30");
        let insights = Insights {
            filter_description: FilterDescription::Entries(vec![FilterEntry::new(
                "boro",
                "Only Brooklyn",
            )]),
            ..Insights::default()
        };
        let schema = schema();

        assert_eq!(
            build_about(&agg, &insights, &schema),
            build_about(&agg, &insights, &schema)
        );
    }
}
