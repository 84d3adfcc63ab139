use hyper::{Method, Request, Response, StatusCode, body::Incoming};
use std::{convert::Infallible, sync::Arc};

use crate::frontend::context::FrontendContext;

use super::dispatcher::handle_metrics_query;

struct HttpHandler {
    ctx: Arc<FrontendContext>,
}

impl HttpHandler {
    fn not_found() -> Response<String> {
        Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body("Not Found".to_string())
            .unwrap()
    }

    fn method_not_allowed() -> Response<String> {
        Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .body("Method Not Allowed".to_string())
            .unwrap()
    }

    async fn handle(&self, req: Request<Incoming>) -> Result<Response<String>, Infallible> {
        match req.uri().path() {
            "/policies/query/metrics" => {
                if req.method() != Method::GET {
                    return Ok(Self::method_not_allowed());
                }
                handle_metrics_query(&req, &self.ctx).await
            }
            _ => Ok(Self::not_found()),
        }
    }
}

pub async fn handle_request(
    req: Request<Incoming>,
    ctx: Arc<FrontendContext>,
) -> Result<Response<String>, Infallible> {
    let handler = HttpHandler { ctx };
    handler.handle(req).await
}
