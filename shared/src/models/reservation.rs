//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Number of guests in a party, always within `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PartySize(u8);

impl PartySize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(guests: i64) -> AppResult<Self> {
        if guests < i64::from(Self::MIN) || guests > i64::from(Self::MAX) {
            return Err(AppError::new(ErrorCode::InvalidPartySize));
        }
        Ok(Self(guests as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PartySize {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}

impl std::fmt::Display for PartySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reservation entity (预订)
///
/// Only `date_time` and `table_id` change after creation, and only through
/// [`Reservation::reschedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub guests: PartySize,
    pub date_time: DateTime<Utc>,
    pub table_id: i64,
}

impl Reservation {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        guests: PartySize,
        date_time: DateTime<Utc>,
        table_id: i64,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::MissingFields,
                "Reservation name must not be empty",
            ));
        }
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::MissingFields,
                "Reservation email must not be empty",
            ));
        }
        if table_id <= 0 {
            return Err(AppError::with_message(
                ErrorCode::TableNotFound,
                format!("Invalid table id {}", table_id),
            ));
        }
        Ok(Self {
            id,
            name,
            email,
            guests,
            date_time,
            table_id,
        })
    }

    /// Move the reservation to a new time slot and table
    pub fn reschedule(&mut self, date_time: DateTime<Utc>, table_id: i64) {
        self.date_time = date_time;
        self.table_id = table_id;
    }
}

// ========== Request payloads ==========
//
// Every field is optional so that absent and empty values can be reported
// as `MissingFields` instead of a deserialization failure.

/// POST /api/reservations/reserve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub guests: Option<i64>,
    pub date_time: Option<String>,
}

/// POST /api/reservations/cancel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub email: Option<String>,
    pub date_time: Option<String>,
}

/// PUT /api/reservations/modify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRequest {
    pub email: Option<String>,
    pub current_date_time: Option<String>,
    pub new_date_time: Option<String>,
}

/// GET /api/reservations/all?date=YYYY-MM-DD
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_seven() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 19, 0, 0).unwrap()
    }

    #[test]
    fn test_party_size_bounds() {
        assert_eq!(
            PartySize::new(0).unwrap_err().code,
            ErrorCode::InvalidPartySize
        );
        assert_eq!(
            PartySize::new(9).unwrap_err().code,
            ErrorCode::InvalidPartySize
        );
        assert_eq!(
            PartySize::new(-3).unwrap_err().code,
            ErrorCode::InvalidPartySize
        );
        assert_eq!(PartySize::new(1).unwrap().get(), 1);
        assert_eq!(PartySize::new(8).unwrap().get(), 8);
    }

    #[test]
    fn test_party_size_serde() {
        let size: PartySize = serde_json::from_str("4").unwrap();
        assert_eq!(size.get(), 4);
        assert_eq!(serde_json::to_string(&size).unwrap(), "4");
        assert!(serde_json::from_str::<PartySize>("12").is_err());
    }

    #[test]
    fn test_reservation_new_rejects_blank_name() {
        let err = Reservation::new(
            1,
            "   ",
            "a@b.co",
            PartySize::new(2).unwrap(),
            at_seven(),
            1,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingFields);
    }

    #[test]
    fn test_reschedule_keeps_identity() {
        let mut reservation = Reservation::new(
            42,
            "Ada",
            "ada@example.com",
            PartySize::new(4).unwrap(),
            at_seven(),
            2,
        )
        .unwrap();
        let later = Utc.with_ymd_and_hms(2025, 3, 2, 20, 0, 0).unwrap();
        reservation.reschedule(later, 3);

        assert_eq!(reservation.id, 42);
        assert_eq!(reservation.name, "Ada");
        assert_eq!(reservation.guests.get(), 4);
        assert_eq!(reservation.date_time, later);
        assert_eq!(reservation.table_id, 3);
    }

    #[test]
    fn test_requests_accept_partial_bodies() {
        let req: ReserveRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ada"));
        assert!(req.email.is_none());
        assert!(req.guests.is_none());

        let req: ModifyRequest = serde_json::from_str(
            r#"{"email":"a@b.co","currentDateTime":"2025-03-01T19:00","newDateTime":"2025-03-01T21:00"}"#,
        )
        .unwrap();
        assert_eq!(req.current_date_time.as_deref(), Some("2025-03-01T19:00"));
        assert_eq!(req.new_date_time.as_deref(), Some("2025-03-01T21:00"));
    }
}
