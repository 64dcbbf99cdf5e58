//! ReservationManager - 预订生命周期
//!
//! Owns the store and enforces every booking rule: field validation, the
//! future-time check, the one-hour notice window for cancel and modify, and
//! conflict-free table assignment.
//!
//! # 并发
//!
//! The store sits behind a single `RwLock`. Create, cancel and modify hold
//! the write lock from the availability check through the mutation, so two
//! requests can never both claim the same table slot. Reads share the lock.

mod error;

pub use error::{ReservationError, ReservationResult};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::models::{
    CancelRequest, CancelledReservation, CustomerReservation, DayReservation, DiningTable,
    ModifyRequest, PartySize, PreviousSlot, RescheduledReservation, Reservation,
    ReservationConfirmation, ReserveRequest,
};
use shared::util::snowflake_id;

use super::clock::Clock;
use super::resolver;
use super::store::ReservationStore;
use crate::utils::time::{day_bounds, parse_date, parse_date_time};
use crate::utils::validation::{is_valid_email, provided};

/// Cancel and modify must happen at least this long before the booked time
pub const NOTICE_WINDOW_MS: i64 = 60 * 60 * 1000;

/// Attempts at drawing an unused reservation id
const ID_ATTEMPTS: usize = 16;

const CREATE_MISSING: &str = "Missing required fields";
const CANCEL_MISSING: &str = "Email and dateTime are required";
const MODIFY_MISSING: &str = "Email, current date/time, and new date/time are required";

const CREATE_BAD_TIME: &str = "Invalid date/time format";
const CANCEL_BAD_TIME: &str = "Invalid dateTime format";

const CREATE_PAST: &str = "Reservation time must be in the future";
const MODIFY_PAST: &str = "New reservation time must be in the future";

const CREATE_FULL: &str = "No tables available for the specified time and party size";
const MODIFY_FULL: &str = "No tables available for the requested new time";

/// Result of a successful time change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescheduled {
    pub previous: PreviousSlot,
    pub reservation: RescheduledReservation,
}

/// Table and reservation counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerStats {
    pub tables: usize,
    pub reservations: usize,
}

#[derive(Debug)]
pub struct ReservationManager {
    store: RwLock<Box<dyn ReservationStore>>,
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl ReservationManager {
    pub fn new(store: impl ReservationStore + 'static, clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self {
            store: RwLock::new(Box::new(store)),
            clock,
            tz,
        }
    }

    pub fn stats(&self) -> ReservationResult<ManagerStats> {
        let store = self.store.read();
        Ok(ManagerStats {
            tables: store.tables()?.len(),
            reservations: store.reservation_count()?,
        })
    }

    // ========== Operations ==========

    /// Book the first suitable free table
    pub fn reserve_table(&self, req: ReserveRequest) -> ReservationResult<ReservationConfirmation> {
        let (Some(name), Some(email), Some(guests), Some(date_time)) = (
            provided(&req.name).filter(|n| !n.trim().is_empty()),
            provided(&req.email),
            req.guests.filter(|g| *g != 0),
            provided(&req.date_time),
        ) else {
            return Err(ReservationError::MissingFields(CREATE_MISSING));
        };

        ensure_email(email)?;
        let guests = PartySize::new(guests).map_err(|_| ReservationError::InvalidPartySize)?;
        let requested = parse_date_time(date_time, self.tz)
            .map_err(|_| ReservationError::InvalidDateTime(CREATE_BAD_TIME))?;
        if requested <= self.clock.now() {
            return Err(ReservationError::PastDateTime(CREATE_PAST));
        }

        let mut store = self.store.write();
        let tables = store.tables()?;
        let reservations = store.reservations()?;
        let table_id = resolver::find_available_table(&tables, &reservations, guests, requested)
            .map(|t| t.id)
            .ok_or(ReservationError::NoAvailability(CREATE_FULL))?;

        let id = next_id(&**store)?;
        let reservation = Reservation::new(id, name, email, guests, requested, table_id)?;
        store.insert(reservation.clone())?;

        tracing::info!(
            reservation_id = reservation.id,
            table_id,
            guests = %guests,
            date_time = %requested,
            "Reservation confirmed"
        );
        Ok(ReservationConfirmation::from(&reservation))
    }

    /// All reservations for an email, earliest first
    pub fn reservations_by_email(
        &self,
        email: &str,
    ) -> ReservationResult<Vec<CustomerReservation>> {
        ensure_email(email)?;

        let store = self.store.read();
        let tables = store.tables()?;
        let mut matching: Vec<Reservation> = store
            .reservations()?
            .into_iter()
            .filter(|r| r.email == email)
            .collect();
        if matching.is_empty() {
            return Err(ReservationError::NoReservationsFound);
        }
        matching.sort_by_key(|r| r.date_time);

        Ok(matching
            .iter()
            .map(|r| CustomerReservation::new(r, table_by_id(&tables, r.table_id)))
            .collect())
    }

    /// Reservations on a local calendar day, earliest first
    pub fn reservations_for_day(&self, date: Option<&str>) -> ReservationResult<Vec<DayReservation>> {
        let date = date
            .filter(|d| !d.is_empty())
            .ok_or(ReservationError::MissingDate)?;
        let day = parse_date(date).map_err(|_| ReservationError::InvalidDate)?;
        let (start, end) = day_bounds(day, self.tz);

        let store = self.store.read();
        let tables = store.tables()?;
        let mut on_day: Vec<Reservation> = store
            .reservations()?
            .into_iter()
            .filter(|r| r.date_time >= start && r.date_time <= end)
            .collect();
        on_day.sort_by_key(|r| r.date_time);

        tracing::debug!(%date, count = on_day.len(), "Listed reservations for day");
        Ok(on_day
            .iter()
            .map(|r| DayReservation::new(r, table_by_id(&tables, r.table_id)))
            .collect())
    }

    /// Remove a reservation identified by email and exact time
    pub fn cancel_reservation(&self, req: CancelRequest) -> ReservationResult<CancelledReservation> {
        let (Some(email), Some(date_time)) = (provided(&req.email), provided(&req.date_time))
        else {
            return Err(ReservationError::MissingFields(CANCEL_MISSING));
        };

        ensure_email(email)?;
        let booked_at = parse_date_time(date_time, self.tz)
            .map_err(|_| ReservationError::InvalidDateTime(CANCEL_BAD_TIME))?;

        let mut store = self.store.write();
        let reservation = find_booking(&**store, email, booked_at)?;
        if !has_notice(reservation.date_time, self.clock.now()) {
            return Err(ReservationError::TooLateToCancel);
        }

        let removed = store.remove(reservation.id)?;
        tracing::info!(
            reservation_id = removed.id,
            table_id = removed.table_id,
            date_time = %removed.date_time,
            "Reservation cancelled"
        );
        Ok(CancelledReservation::from(&removed))
    }

    /// Move a reservation to a new time, reassigning its table
    ///
    /// Nothing changes when no table is free at the new time.
    pub fn modify_reservation_time(&self, req: ModifyRequest) -> ReservationResult<Rescheduled> {
        let (Some(email), Some(current), Some(new)) = (
            provided(&req.email),
            provided(&req.current_date_time),
            provided(&req.new_date_time),
        ) else {
            return Err(ReservationError::MissingFields(MODIFY_MISSING));
        };

        ensure_email(email)?;
        let current = parse_date_time(current, self.tz)
            .map_err(|_| ReservationError::InvalidDateTime(CREATE_BAD_TIME))?;
        let new = parse_date_time(new, self.tz)
            .map_err(|_| ReservationError::InvalidDateTime(CREATE_BAD_TIME))?;
        let now = self.clock.now();
        if new <= now {
            return Err(ReservationError::PastDateTime(MODIFY_PAST));
        }

        let mut store = self.store.write();
        let existing = find_booking(&**store, email, current)?;
        if !has_notice(existing.date_time, now) {
            return Err(ReservationError::TooLateToModify);
        }

        // The reservation being moved still counts against its own slot
        let tables = store.tables()?;
        let reservations = store.reservations()?;
        let table_id =
            resolver::find_available_table(&tables, &reservations, existing.guests, new)
                .map(|t| t.id)
                .ok_or(ReservationError::NoAvailability(MODIFY_FULL))?;

        let previous = PreviousSlot {
            date_time: existing.date_time,
            table_number: existing.table_id,
        };
        let mut updated = existing;
        updated.reschedule(new, table_id);
        store.replace(updated.clone())?;

        tracing::info!(
            reservation_id = updated.id,
            from = %previous.date_time,
            to = %updated.date_time,
            from_table = previous.table_number,
            to_table = updated.table_id,
            "Reservation time modified"
        );
        Ok(Rescheduled {
            previous,
            reservation: RescheduledReservation::from(&updated),
        })
    }
}

fn ensure_email(email: &str) -> ReservationResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ReservationError::InvalidEmail)
    }
}

/// Whether `booked_at` is at least [`NOTICE_WINDOW_MS`] after `now`
fn has_notice(booked_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (booked_at - now).num_milliseconds() >= NOTICE_WINDOW_MS
}

fn table_by_id(tables: &[DiningTable], id: i64) -> Option<&DiningTable> {
    tables.iter().find(|t| t.id == id)
}

/// First reservation matching email and exact instant
fn find_booking(
    store: &dyn ReservationStore,
    email: &str,
    booked_at: DateTime<Utc>,
) -> ReservationResult<Reservation> {
    store
        .reservations()?
        .into_iter()
        .find(|r| r.email == email && r.date_time == booked_at)
        .ok_or(ReservationError::NotFound)
}

fn next_id(store: &dyn ReservationStore) -> ReservationResult<i64> {
    for _ in 0..ID_ATTEMPTS {
        let id = snowflake_id();
        if !store.contains(id)? {
            return Ok(id);
        }
    }
    Err(ReservationError::Internal(
        "could not allocate a reservation id".to_string(),
    ))
}

#[cfg(test)]
mod tests;
