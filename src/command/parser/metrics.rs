use std::collections::HashMap;

use crate::command::parser::error::ParseError;
use crate::command::types::{Aggregate, Filter, QuerySpec};
use crate::engine::schema::FieldCatalog;

/// Validates the decoded query parameters of one metrics request.
///
/// `metrics` and `for` are required and checked up front; everything after
/// that point can assume both are present. Field names are checked against
/// the catalog before any SQL is assembled, so the compiler only ever sees
/// whitelisted identifiers.
pub fn parse_metrics_request(
    params: &HashMap<String, String>,
    catalog: &FieldCatalog,
) -> Result<QuerySpec, ParseError> {
    let (metrics, target) = match (params.get("metrics"), params.get("for")) {
        (Some(metrics), Some(target)) => (metrics, target),
        _ => return Err(ParseError::MissingRequired),
    };

    let aggregates = parse_aggregates(metrics)?;
    if aggregates.is_empty() {
        return Err(ParseError::MissingRequired);
    }

    if !catalog.is_numeric(target) {
        return Err(ParseError::UnknownTargetField(target.clone()));
    }

    let group_field = match params.get("by") {
        Some(by) if catalog.is_numeric(by) => Some(by.clone()),
        Some(by) => return Err(ParseError::UnknownGroupField(by.clone())),
        None => None,
    };

    let filter = parse_filter(params, catalog)?;

    Ok(QuerySpec {
        aggregates,
        target_field: target.clone(),
        group_field,
        filter,
    })
}

/// Splits the comma-separated `metrics` value into aggregate operations.
/// Entries may arrive wrapped in brackets (`[sum,count]`); the punctuation
/// is stripped before matching.
fn parse_aggregates(raw: &str) -> Result<Vec<Aggregate>, ParseError> {
    let mut aggregates = Vec::new();

    for entry in raw.split(',') {
        let token = entry
            .trim()
            .trim_matches(|c| c == '[' || c == ']')
            .trim();
        if token.is_empty() {
            continue;
        }
        match Aggregate::parse(token) {
            Some(agg) => aggregates.push(agg),
            None => return Err(ParseError::UnknownMetric(token.to_string())),
        }
    }

    Ok(aggregates)
}

fn parse_filter(
    params: &HashMap<String, String>,
    catalog: &FieldCatalog,
) -> Result<Option<Filter>, ParseError> {
    match (params.get("filter_feat"), params.get("filter_val")) {
        (Some(field), Some(value)) => {
            if !catalog.is_filterable(field) {
                return Err(ParseError::UnknownFilterField(field.clone()));
            }
            Ok(Some(Filter {
                field: field.clone(),
                value: value.clone(),
            }))
        }
        (None, None) => Ok(None),
        _ => Err(ParseError::IncompleteFilter),
    }
}
