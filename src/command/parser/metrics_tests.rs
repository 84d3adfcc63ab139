use std::collections::HashMap;

use crate::command::parser::error::ParseError;
use crate::command::parser::metrics::parse_metrics_request;
use crate::command::types::{Aggregate, Filter};
use crate::engine::schema::FieldCatalog;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_minimal_sum_request() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "sum"), ("for", "insurance_losses")]);

    let spec = parse_metrics_request(&params, &catalog).expect("request should validate");

    assert_eq!(spec.aggregates, vec![Aggregate::Sum]);
    assert_eq!(spec.target_field, "insurance_losses");
    assert_eq!(spec.group_field, None);
    assert_eq!(spec.filter, None);
}

#[test]
fn test_parse_multiple_metrics_preserves_order() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "count,sum"), ("for", "driver_age")]);

    let spec = parse_metrics_request(&params, &catalog).expect("request should validate");

    assert_eq!(spec.aggregates, vec![Aggregate::Count, Aggregate::Sum]);
}

#[test]
fn test_parse_bracketed_metrics_list() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "[sum, count]"), ("for", "insurance_claims")]);

    let spec = parse_metrics_request(&params, &catalog).expect("brackets should be stripped");

    assert_eq!(spec.aggregates, vec![Aggregate::Sum, Aggregate::Count]);
}

#[test]
fn test_unknown_metric_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "avg"), ("for", "driver_age")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::UnknownMetric("avg".to_string()));
}

#[test]
fn test_unknown_metric_in_list_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "sum,median,count"), ("for", "driver_age")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::UnknownMetric("median".to_string()));
}

#[test]
fn test_missing_metrics_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("for", "driver_age")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::MissingRequired);
}

#[test]
fn test_missing_for_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "count")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::MissingRequired);
}

#[test]
fn test_missing_both_required_is_rejected_regardless_of_other_params() {
    let catalog = FieldCatalog::new();
    let params = params(&[("filter_feat", "driver_gender"), ("filter_val", "F")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::MissingRequired);
}

#[test]
fn test_empty_metrics_value_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", ""), ("for", "driver_age")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::MissingRequired);
}

#[test]
fn test_non_numeric_for_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[("metrics", "sum"), ("for", "driver_gender")]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::UnknownTargetField("driver_gender".to_string()));
}

#[test]
fn test_non_numeric_by_is_rejected() {
    let catalog = FieldCatalog::new();
    let params = params(&[
        ("metrics", "sum"),
        ("for", "insurance_losses"),
        ("by", "driver_marital"),
    ]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::UnknownGroupField("driver_marital".to_string()));
}

#[test]
fn test_by_field_is_kept_when_numeric() {
    let catalog = FieldCatalog::new();
    let params = params(&[
        ("metrics", "sum"),
        ("for", "insurance_losses"),
        ("by", "insurance_premium"),
    ]);

    let spec = parse_metrics_request(&params, &catalog).expect("request should validate");

    assert_eq!(spec.group_field, Some("insurance_premium".to_string()));
}

#[test]
fn test_filter_requires_both_halves() {
    let catalog = FieldCatalog::new();

    let missing_val = params(&[
        ("metrics", "count"),
        ("for", "driver_age"),
        ("filter_feat", "driver_gender"),
    ]);
    assert_eq!(
        parse_metrics_request(&missing_val, &catalog).unwrap_err(),
        ParseError::IncompleteFilter
    );

    let missing_feat = params(&[
        ("metrics", "count"),
        ("for", "driver_age"),
        ("filter_val", "F"),
    ]);
    assert_eq!(
        parse_metrics_request(&missing_feat, &catalog).unwrap_err(),
        ParseError::IncompleteFilter
    );
}

#[test]
fn test_filter_field_must_be_filterable() {
    let catalog = FieldCatalog::new();
    let params = params(&[
        ("metrics", "count"),
        ("for", "driver_age"),
        ("filter_feat", "postcode"),
        ("filter_val", "90210"),
    ]);

    let err = parse_metrics_request(&params, &catalog).unwrap_err();

    assert_eq!(err, ParseError::UnknownFilterField("postcode".to_string()));
}

#[test]
fn test_valid_filter_is_kept() {
    let catalog = FieldCatalog::new();
    let params = params(&[
        ("metrics", "count"),
        ("for", "driver_age"),
        ("filter_feat", "driver_gender"),
        ("filter_val", "F"),
    ]);

    let spec = parse_metrics_request(&params, &catalog).expect("request should validate");

    assert_eq!(
        spec.filter,
        Some(Filter {
            field: "driver_gender".to_string(),
            value: "F".to_string(),
        })
    );
}

#[test]
fn test_filter_on_numeric_field_is_allowed() {
    let catalog = FieldCatalog::new();
    let params = params(&[
        ("metrics", "sum"),
        ("for", "insurance_losses"),
        ("filter_feat", "vehicle_age"),
        ("filter_val", "10"),
    ]);

    let spec = parse_metrics_request(&params, &catalog).expect("numeric filters are filterable");

    assert_eq!(spec.filter.unwrap().field, "vehicle_age");
}
