//! Field resolution
//!
//! Linear scans by physical name, first match wins, `None` when nothing
//! matches. Dimension lookup walks the buckets in a fixed order — time,
//! geo, categorical — so a name that (erroneously) appears in two buckets
//! resolves to the earlier one.

use vq_model::{DataSourceInfo, FieldMetadata, SchemaDocument};

/// Resolve a dimension by physical name
///
/// Scans time, then geo, then categorical.
#[must_use]
pub fn resolve_dimension<'a>(name: &str, schema: &'a SchemaDocument) -> Option<&'a FieldMetadata> {
    let buckets = &schema.dimensions;
    scan(name, &buckets.time_dimension)
        .or_else(|| scan(name, &buckets.geo_dimension))
        .or_else(|| scan(name, &buckets.categorical_dimension))
}

/// Resolve a measure by physical name
#[must_use]
pub fn resolve_measure<'a>(name: &str, schema: &'a SchemaDocument) -> Option<&'a FieldMetadata> {
    scan(name, &schema.measures)
}

/// Resolve any field: dimensions first, then measures
#[must_use]
pub fn resolve_any<'a>(name: &str, schema: &'a SchemaDocument) -> Option<&'a FieldMetadata> {
    resolve_dimension(name, schema).or_else(|| resolve_measure(name, schema))
}

/// Resolve a data source by id from an inline metadata list
#[must_use]
pub fn resolve_data_source<'a>(
    id: &str,
    sources: &'a [DataSourceInfo],
) -> Option<&'a DataSourceInfo> {
    sources.iter().find(|source| source.data_source_id == id)
}

fn scan<'a>(name: &str, fields: &'a [FieldMetadata]) -> Option<&'a FieldMetadata> {
    fields.iter().find(|field| field.physical_name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vq_model::DimensionBuckets;

    fn schema() -> SchemaDocument {
        SchemaDocument {
            dimensions: DimensionBuckets {
                time_dimension: vec![FieldMetadata::new("created_date", "Created Date", "date")],
                geo_dimension: vec![
                    FieldMetadata::new("borough", "Borough", "string"),
                    // erroneous duplicate of a time field, must lose
                    FieldMetadata::new("created_date", "Created Date (geo)", "geo"),
                ],
                categorical_dimension: vec![FieldMetadata::new(
                    "complaint_type",
                    "Complaint Type",
                    "string",
                )],
            },
            measures: vec![FieldMetadata::new("num_requests", "Requests", "integer")],
            data_sources: vec![DataSourceInfo {
                data_source_id: "nyc311".into(),
                data_source_name: "311 Service Requests".into(),
                ..DataSourceInfo::default()
            }],
        }
    }

    #[test]
    fn dimension_lookup_prefers_time_bucket() {
        let schema = schema();
        let meta = resolve_dimension("created_date", &schema).unwrap();
        assert_eq!(meta.display_name, "Created Date");
    }

    #[test]
    fn dimension_lookup_reaches_all_buckets() {
        let schema = schema();
        assert!(resolve_dimension("borough", &schema).is_some());
        assert!(resolve_dimension("complaint_type", &schema).is_some());
        assert!(resolve_dimension("num_requests", &schema).is_none());
    }

    #[test]
    fn any_lookup_falls_through_to_measures() {
        let schema = schema();
        let meta = resolve_any("num_requests", &schema).unwrap();
        assert_eq!(meta.display_name, "Requests");
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let schema = schema();
        assert!(resolve_any("xyz_unknown", &schema).is_none());
        assert!(resolve_any("xyz_unknown", &SchemaDocument::empty()).is_none());
    }

    #[test]
    fn data_source_lookup_by_id() {
        let schema = schema();
        let source = resolve_data_source("nyc311", &schema.data_sources).unwrap();
        assert_eq!(source.data_source_name, "311 Service Requests");
        assert!(resolve_data_source("other", &schema.data_sources).is_none());
    }
}
