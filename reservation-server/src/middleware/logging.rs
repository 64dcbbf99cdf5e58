//! 访问日志
//!
//! One `http_access` event per finished request. 4xx and 5xx are logged at
//! warn so rejected bookings stand out.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::RequestId;
use tracing::{info, warn};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_owned(), |p| p.as_str().to_owned());

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    if status.is_client_error() || status.is_server_error() {
        warn!(
            target: "http_access",
            %request_id, %method, %route, status = status.as_u16(), latency_ms,
            "Request rejected"
        );
    } else {
        info!(
            target: "http_access",
            %request_id, %method, %route, status = status.as_u16(), latency_ms,
            "Request served"
        );
    }
    response
}
