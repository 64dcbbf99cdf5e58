//! Availability resolver
//!
//! Picks the first table, in pool order, that seats the party and holds no
//! reservation within the overlap window of the requested time. Every
//! reservation occupies its table for the same fixed duration.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shared::models::{DiningTable, PartySize, Reservation};

/// Two reservations on one table must start at least this far apart
pub const OVERLAP_WINDOW_MS: i64 = 2 * 60 * 60 * 1000;

/// Whether two start times are closer than [`OVERLAP_WINDOW_MS`]
///
/// Exactly two hours apart does not conflict.
pub fn conflicts(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    (a - b).num_milliseconds().abs() < OVERLAP_WINDOW_MS
}

/// Tables already taken around `requested`
pub fn booked_tables(reservations: &[Reservation], requested: DateTime<Utc>) -> HashSet<i64> {
    reservations
        .iter()
        .filter(|r| conflicts(r.date_time, requested))
        .map(|r| r.table_id)
        .collect()
}

/// First-fit table for a party at `requested`, or `None` when fully booked
///
/// Capacity is a lower bound only, so a party of two may land on the
/// eight-seat table when everything smaller is taken.
pub fn find_available_table<'a>(
    tables: &'a [DiningTable],
    reservations: &[Reservation],
    guests: PartySize,
    requested: DateTime<Utc>,
) -> Option<&'a DiningTable> {
    let booked = booked_tables(reservations, requested);
    tables
        .iter()
        .find(|table| table.seats(guests) && !booked.contains(&table.id))
}
