use crate::shared::response::types::{ApiError, QueryResponse};

/// Serializes response envelopes for the HTTP transport.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn render_data(resp: &QueryResponse) -> String {
        serde_json::to_string(resp).unwrap()
    }

    pub fn render_error(err: &ApiError) -> String {
        serde_json::to_string(err).unwrap()
    }
}
