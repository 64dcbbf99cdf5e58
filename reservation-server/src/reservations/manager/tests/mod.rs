use super::*;
use crate::reservations::clock::FixedClock;
use crate::reservations::store::InMemoryStore;
use chrono::{Duration, TimeZone};
use shared::error::ErrorCode;


/// 2025-03-01 12:00 UTC
fn base_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, min, 0).unwrap()
}

fn create_test_manager() -> (ReservationManager, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(base_now()));
    let manager = ReservationManager::new(
        InMemoryStore::with_default_pool(),
        clock.clone(),
        Tz::UTC,
    );
    (manager, clock)
}

fn reserve_req(name: &str, email: &str, guests: i64, date_time: &str) -> ReserveRequest {
    ReserveRequest {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        guests: Some(guests),
        date_time: Some(date_time.to_string()),
    }
}

fn cancel_req(email: &str, date_time: &str) -> CancelRequest {
    CancelRequest {
        email: Some(email.to_string()),
        date_time: Some(date_time.to_string()),
    }
}

fn modify_req(email: &str, current: &str, new: &str) -> ModifyRequest {
    ModifyRequest {
        email: Some(email.to_string()),
        current_date_time: Some(current.to_string()),
        new_date_time: Some(new.to_string()),
    }
}

/// Book and return the assigned table
fn book(manager: &ReservationManager, email: &str, guests: i64, date_time: &str) -> i64 {
    manager
        .reserve_table(reserve_req("Guest", email, guests, date_time))
        .unwrap_or_else(|e| panic!("booking {date_time} failed: {e}"))
        .table_number
}

fn code_of<T: std::fmt::Debug>(result: ReservationResult<T>) -> ErrorCode {
    result.unwrap_err().code()
}
