use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::super::store::StoreError;

/// Manager errors
///
/// Variants carrying a `&'static str` use a message that depends on which
/// operation raised them.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Number of guests must be between 1 and 8")]
    InvalidPartySize,

    #[error("{0}")]
    InvalidDateTime(&'static str),

    #[error("Date parameter is required (YYYY-MM-DD)")]
    MissingDate,

    #[error("Invalid date format. Please use YYYY-MM-DD")]
    InvalidDate,

    #[error("{0}")]
    PastDateTime(&'static str),

    #[error("{0}")]
    NoAvailability(&'static str),

    #[error("Reservation not found")]
    NotFound,

    #[error("No reservations found for this email")]
    NoReservationsFound,

    #[error("Reservations must be cancelled at least 1 hour in advance")]
    TooLateToCancel,

    #[error(
        "Reservations can only be modified at least 1 hour before the current reservation time"
    )]
    TooLateToModify,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] AppError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ReservationResult<T> = Result<T, ReservationError>;

impl ReservationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReservationError::MissingFields(_) => ErrorCode::MissingFields,
            ReservationError::InvalidEmail => ErrorCode::InvalidEmail,
            ReservationError::InvalidPartySize => ErrorCode::InvalidPartySize,
            ReservationError::InvalidDateTime(_) => ErrorCode::InvalidDateTime,
            ReservationError::MissingDate => ErrorCode::MissingDate,
            ReservationError::InvalidDate => ErrorCode::InvalidDate,
            ReservationError::PastDateTime(_) => ErrorCode::PastDateTime,
            ReservationError::NoAvailability(_) => ErrorCode::NoAvailability,
            ReservationError::NotFound => ErrorCode::ReservationNotFound,
            ReservationError::NoReservationsFound => ErrorCode::NoReservationsFound,
            ReservationError::TooLateToCancel => ErrorCode::TooLateToCancel,
            ReservationError::TooLateToModify => ErrorCode::TooLateToModify,
            ReservationError::Storage(_) | ReservationError::Internal(_) => {
                ErrorCode::InternalError
            }
            ReservationError::Model(e) => e.code,
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::Model(e) => e,
            ReservationError::Storage(e) => {
                // 保留技术细节用于日志
                tracing::error!(error = %e, "Reservation storage error");
                AppError::internal(e.to_string())
            }
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}
