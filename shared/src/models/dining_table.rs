//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::PartySize;
use crate::error::{AppError, AppResult, ErrorCode};

/// Capacities of the pool the restaurant opens with, in pool order.
pub const DEFAULT_TABLE_CAPACITIES: [i32; 5] = [2, 4, 4, 6, 8];

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub capacity: i32,
    /// Static flag, never consulted when allocating tables.
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl DiningTable {
    pub fn new(id: i64, capacity: i32) -> AppResult<Self> {
        if id <= 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidTable,
                format!("Table id must be positive, got {}", id),
            ));
        }
        if capacity <= 0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidTable,
                format!("Table {} capacity must be positive, got {}", id, capacity),
            ));
        }
        Ok(Self {
            id,
            capacity,
            is_available: true,
        })
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Whether the party fits at this table
    pub fn seats(&self, guests: PartySize) -> bool {
        self.capacity >= i32::from(guests.get())
    }

    /// Build a pool from capacities, assigning ids 1.. in order
    pub fn pool_from_capacities(capacities: &[i32]) -> AppResult<Vec<Self>> {
        capacities
            .iter()
            .zip(1_i64..)
            .map(|(&capacity, id)| Self::new(id, capacity))
            .collect()
    }

    /// The default five-table pool
    pub fn default_pool() -> Vec<Self> {
        DEFAULT_TABLE_CAPACITIES
            .iter()
            .zip(1_i64..)
            .map(|(&capacity, id)| Self {
                id,
                capacity,
                is_available: true,
            })
            .collect()
    }
}
