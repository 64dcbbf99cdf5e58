//! Reservation storage
//!
//! The store holds the table pool and the reservation set. It does no
//! validation and no locking; the manager serializes access to it.

use shared::models::{DiningTable, Reservation};
use thiserror::Error;

pub mod memory;

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait ReservationStore: Send + Sync + std::fmt::Debug {
    /// Table pool in allocation order
    fn tables(&self) -> StoreResult<Vec<DiningTable>>;
    /// All reservations in insertion order
    fn reservations(&self) -> StoreResult<Vec<Reservation>>;
    fn contains(&self, id: i64) -> StoreResult<bool>;
    /// Fails with `Conflict` when the id is taken
    fn insert(&mut self, reservation: Reservation) -> StoreResult<()>;
    /// Fails with `NotFound` when the id is unknown
    fn replace(&mut self, reservation: Reservation) -> StoreResult<()>;
    /// Fails with `NotFound` when the id is unknown
    fn remove(&mut self, id: i64) -> StoreResult<Reservation>;
    fn reservation_count(&self) -> StoreResult<usize>;
}
