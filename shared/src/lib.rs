//! Shared types for the reservation service
//!
//! Models, request/response DTOs, error codes and id generation used by
//! `reservation-server` and by anything that talks to its HTTP API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
