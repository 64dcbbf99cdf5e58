use axum::BoxError;
use tower::timeout::error::Elapsed;

use crate::utils::{AppError, ErrorCode};

/// Map errors from the timeout layer into the JSON error body
///
/// An elapsed deadline becomes 408 `TimeoutError`. Anything else the layer
/// stack surfaces is an internal error.
pub async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request exceeded the configured timeout");
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}
