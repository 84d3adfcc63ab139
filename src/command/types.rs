use std::fmt;

/// Aggregate operations accepted in the `metrics` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Sum,
}

impl Aggregate {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "count" => Some(Aggregate::Count),
            "sum" => Some(Aggregate::Sum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equality predicate on one filterable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

/// Validated form of one metrics request.
///
/// Built fresh from the query parameters of each request and discarded once
/// the response is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Requested operations, in request order. Never empty.
    pub aggregates: Vec<Aggregate>,
    /// Numeric field the aggregates are computed over.
    pub target_field: String,
    /// Optional numeric field used as a ratio denominator.
    pub group_field: Option<String>,
    pub filter: Option<Filter>,
}
