//! Response views returned by the reservation API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiningTable, PartySize, Reservation};

/// Reservation as returned right after booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConfirmation {
    pub id: i64,
    pub name: String,
    pub table_number: i64,
    pub guests: PartySize,
    pub date_time: DateTime<Utc>,
}

impl From<&Reservation> for ReservationConfirmation {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            table_number: r.table_id,
            guests: r.guests,
            date_time: r.date_time,
        }
    }
}

/// Reservation joined with its table, as listed for one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReservation {
    pub id: i64,
    pub name: String,
    pub table_number: i64,
    pub guests: PartySize,
    pub date_time: DateTime<Utc>,
    pub table: Option<DiningTable>,
}

impl CustomerReservation {
    pub fn new(r: &Reservation, table: Option<&DiningTable>) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            table_number: r.table_id,
            guests: r.guests,
            date_time: r.date_time,
            table: table.cloned(),
        }
    }
}

/// Reservation joined with its table, as listed for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub guests: PartySize,
    pub table_number: i64,
    pub date_time: DateTime<Utc>,
    pub table: Option<DiningTable>,
}

impl DayReservation {
    pub fn new(r: &Reservation, table: Option<&DiningTable>) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            email: r.email.clone(),
            guests: r.guests,
            table_number: r.table_id,
            date_time: r.date_time,
            table: table.cloned(),
        }
    }
}

/// Summary of a removed reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledReservation {
    pub name: String,
    pub email: String,
    pub guests: PartySize,
    pub date_time: DateTime<Utc>,
    pub table_number: i64,
}

impl From<&Reservation> for CancelledReservation {
    fn from(r: &Reservation) -> Self {
        Self {
            name: r.name.clone(),
            email: r.email.clone(),
            guests: r.guests,
            date_time: r.date_time,
            table_number: r.table_id,
        }
    }
}

/// Slot a reservation held before it was moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousSlot {
    pub date_time: DateTime<Utc>,
    pub table_number: i64,
}

/// Reservation after it was moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduledReservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub guests: PartySize,
    pub date_time: DateTime<Utc>,
    pub table_number: i64,
}

impl From<&Reservation> for RescheduledReservation {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            email: r.email.clone(),
            guests: r.guests,
            date_time: r.date_time,
            table_number: r.table_id,
        }
    }
}

// ========== Response envelopes ==========

/// 201 body of POST /api/reservations/reserve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveResponse {
    pub message: String,
    pub reservation: ReservationConfirmation,
}

/// 200 body of GET /api/reservations/user/{email}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerReservationsResponse {
    pub message: String,
    pub reservations: Vec<CustomerReservation>,
}

/// 200 body of GET /api/reservations/all
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReservationsResponse {
    pub message: String,
    pub date: String,
    pub total_reservations: usize,
    pub reservations: Vec<DayReservation>,
}

/// 200 body of POST /api/reservations/cancel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub message: String,
    pub cancelled_reservation: CancelledReservation,
}

/// 200 body of PUT /api/reservations/modify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyResponse {
    pub message: String,
    pub previous_reservation: PreviousSlot,
    pub new_reservation: RescheduledReservation,
}
