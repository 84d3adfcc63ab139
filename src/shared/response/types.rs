use serde::Serialize;
use serde_json::{Map, Value};

/// Success envelope for the metrics endpoint: the raw query string echoed
/// back verbatim, plus one mapping per result row keyed by column name.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub qs: String,
    pub data: Vec<Map<String, Value>>,
}

/// Problem body returned on request or execution failures.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub title: String,
    pub description: String,
    pub code: u16,
}

impl ApiError {
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self {
            title: "400 Bad Request".to_string(),
            description: description.into(),
            code: 400,
        }
    }

    pub fn internal(description: impl Into<String>) -> Self {
        Self {
            title: "500 Internal Server Error".to_string(),
            description: description.into(),
            code: 500,
        }
    }
}
