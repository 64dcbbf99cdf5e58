#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use reservation_server::reservations::{FixedClock, InMemoryStore};
use reservation_server::{Config, ReservationManager, ServerState, build_app};
use shared::models::DiningTable;

/// 2025-03-01 12:00 UTC
pub fn base_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

pub fn test_state() -> (ServerState, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(base_now()));
    let config = Config::with_overrides(0, Tz::UTC, DiningTable::default_pool());
    let manager = ReservationManager::new(
        InMemoryStore::new(config.tables.clone()),
        clock.clone(),
        config.timezone,
    );
    (ServerState::with_manager(config, manager), clock)
}

pub fn test_app() -> (Router, Arc<FixedClock>) {
    let (state, clock) = test_state();
    (build_app(&state), clock)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
