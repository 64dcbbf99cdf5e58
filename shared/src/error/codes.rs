//! Unified error codes for the reservation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Table errors (70xx) and reservation errors (74xx)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request (malformed body, wrong content type)
    InvalidRequest = 5,

    // ==================== 70xx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table definition violates pool invariants (id or capacity not positive)
    InvalidTable = 7005,

    // ==================== 74xx: Reservation ====================
    /// One or more required request fields are absent or empty
    MissingFields = 7401,
    /// Email does not look like local@domain.tld
    InvalidEmail = 7402,
    /// Party size outside 1..=8
    InvalidPartySize = 7403,
    /// Date-time string could not be parsed
    InvalidDateTime = 7404,
    /// Day query without a date parameter
    MissingDate = 7405,
    /// Day query with a malformed date
    InvalidDate = 7406,
    /// Requested time is not in the future
    PastDateTime = 7407,
    /// No table satisfies the party size at the requested time
    NoAvailability = 7408,
    /// No reservation matches email and date-time
    ReservationNotFound = 7409,
    /// Customer has no reservations at all
    NoReservationsFound = 7410,
    /// Cancellation inside the one hour notice window
    TooLateToCancel = 7411,
    /// Modification inside the one hour notice window
    TooLateToModify = 7412,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidTable => "Table id and capacity must be positive",

            // Reservation
            ErrorCode::MissingFields => "Missing required fields",
            ErrorCode::InvalidEmail => "Invalid email format",
            ErrorCode::InvalidPartySize => "Number of guests must be between 1 and 8",
            ErrorCode::InvalidDateTime => "Invalid date/time format",
            ErrorCode::MissingDate => "Date parameter is required (YYYY-MM-DD)",
            ErrorCode::InvalidDate => "Invalid date format. Please use YYYY-MM-DD",
            ErrorCode::PastDateTime => "Reservation time must be in the future",
            ErrorCode::NoAvailability => {
                "No tables available for the specified time and party size"
            }
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::NoReservationsFound => "No reservations found for this email",
            ErrorCode::TooLateToCancel => {
                "Reservations must be cancelled at least 1 hour in advance"
            }
            ErrorCode::TooLateToModify => {
                "Reservations can only be modified at least 1 hour before the current reservation time"
            }

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7005 => Ok(ErrorCode::InvalidTable),

            // Reservation
            7401 => Ok(ErrorCode::MissingFields),
            7402 => Ok(ErrorCode::InvalidEmail),
            7403 => Ok(ErrorCode::InvalidPartySize),
            7404 => Ok(ErrorCode::InvalidDateTime),
            7405 => Ok(ErrorCode::MissingDate),
            7406 => Ok(ErrorCode::InvalidDate),
            7407 => Ok(ErrorCode::PastDateTime),
            7408 => Ok(ErrorCode::NoAvailability),
            7409 => Ok(ErrorCode::ReservationNotFound),
            7410 => Ok(ErrorCode::NoReservationsFound),
            7411 => Ok(ErrorCode::TooLateToCancel),
            7412 => Ok(ErrorCode::TooLateToModify),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
