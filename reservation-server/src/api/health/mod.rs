//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "tables": 5,
//!   "reservations": 3
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    tables: usize,
    reservations: usize,
}

/// GET /health
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let (status, tables, reservations) = match state.reservations().stats() {
        Ok(stats) => ("ok", stats.tables, stats.reservations),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read the store");
            ("degraded", 0, 0)
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        tables,
        reservations,
    })
}
