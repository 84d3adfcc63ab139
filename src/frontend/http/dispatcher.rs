use hyper::{Request, Response, StatusCode, body::Incoming, header};
use std::convert::Infallible;
use tracing::{error, info};

use crate::command::handlers::metrics;
use crate::command::parser::parse_metrics_request;
use crate::frontend::context::FrontendContext;
use crate::shared::response::json::JsonRenderer;
use crate::shared::response::types::{ApiError, QueryResponse};

use super::query_string::parse_query;

pub async fn handle_metrics_query(
    req: &Request<Incoming>,
    ctx: &FrontendContext,
) -> Result<Response<String>, Infallible> {
    let qs = req.uri().query().unwrap_or("");
    Ok(respond_to_query(qs, ctx).await)
}

/// Runs the full pipeline for one raw query string: decode, validate,
/// compile and execute, then wrap rows in the response envelope. The raw
/// query string is echoed back verbatim in both success and error bodies.
pub async fn respond_to_query(qs: &str, ctx: &FrontendContext) -> Response<String> {
    let params = parse_query(qs);

    let spec = match parse_metrics_request(&params, &ctx.catalog) {
        Ok(spec) => spec,
        Err(e) => {
            return bad_request(&ApiError::bad_request(format!(
                "{}. Please check the query params: {}",
                e, qs
            )));
        }
    };

    info!(target: "policy_metrics::dispatch", ?spec, "Dispatching metrics query");

    match metrics::handle(&spec, ctx.store.clone()).await {
        Ok(data) => ok_response(&QueryResponse {
            qs: qs.to_string(),
            data,
        }),
        Err(e) => {
            error!(target: "policy_metrics::dispatch", error = %e, "Statement execution failed");
            internal_error(&ApiError::internal(format!(
                "Statement execution failed. Please check the query params: {}",
                qs
            )))
        }
    }
}

fn ok_response(body: &QueryResponse) -> Response<String> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(JsonRenderer::render_data(body))
        .unwrap()
}

fn bad_request(body: &ApiError) -> Response<String> {
    Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(JsonRenderer::render_error(body))
        .unwrap()
}

fn internal_error(body: &ApiError) -> Response<String> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(JsonRenderer::render_error(body))
        .unwrap()
}
