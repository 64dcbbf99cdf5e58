//! Unified error system for the reservation service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a message
//! - [`ErrorBody`]: JSON body written for failed requests
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 7xxx: Table and reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvalidEmail);
//! assert_eq!(err.message, "Invalid email format");
//!
//! let err = AppError::with_message(ErrorCode::MissingFields, "Email and dateTime are required");
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
