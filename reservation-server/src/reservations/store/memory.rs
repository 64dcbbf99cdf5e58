use shared::models::{DiningTable, Reservation};

use super::{ReservationStore, StoreError, StoreResult};

/// Process-local store, lost on restart
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Vec<DiningTable>,
    reservations: Vec<Reservation>,
}

impl InMemoryStore {
    pub fn new(tables: Vec<DiningTable>) -> Self {
        Self {
            tables,
            reservations: Vec::new(),
        }
    }

    /// Store seeded with the default five-table pool
    pub fn with_default_pool() -> Self {
        Self::new(DiningTable::default_pool())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.reservations.iter().position(|r| r.id == id)
    }
}

impl ReservationStore for InMemoryStore {
    fn tables(&self) -> StoreResult<Vec<DiningTable>> {
        Ok(self.tables.clone())
    }

    fn reservations(&self) -> StoreResult<Vec<Reservation>> {
        Ok(self.reservations.clone())
    }

    fn contains(&self, id: i64) -> StoreResult<bool> {
        Ok(self.position(id).is_some())
    }

    fn insert(&mut self, reservation: Reservation) -> StoreResult<()> {
        if self.position(reservation.id).is_some() {
            return Err(StoreError::Conflict(format!(
                "reservation {}",
                reservation.id
            )));
        }
        self.reservations.push(reservation);
        Ok(())
    }

    fn replace(&mut self, reservation: Reservation) -> StoreResult<()> {
        let idx = self
            .position(reservation.id)
            .ok_or_else(|| StoreError::NotFound(format!("reservation {}", reservation.id)))?;
        self.reservations[idx] = reservation;
        Ok(())
    }

    fn remove(&mut self, id: i64) -> StoreResult<Reservation> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(format!("reservation {}", id)))?;
        Ok(self.reservations.remove(idx))
    }

    fn reservation_count(&self) -> StoreResult<usize> {
        Ok(self.reservations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::PartySize;

    fn reservation(id: i64, table_id: i64) -> Reservation {
        Reservation::new(
            id,
            "Ada",
            "ada@example.com",
            PartySize::new(2).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 19, 0, 0).unwrap(),
            table_id,
        )
        .unwrap()
    }

    #[test]
    fn test_default_pool_in_allocation_order() {
        let store = InMemoryStore::with_default_pool();
        let capacities: Vec<i32> = store.tables().unwrap().iter().map(|t| t.capacity).collect();
        assert_eq!(capacities, vec![2, 4, 4, 6, 8]);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = InMemoryStore::with_default_pool();
        store.insert(reservation(1, 1)).unwrap();
        let err = store.insert(reservation(1, 2)).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.reservation_count().unwrap(), 1);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut store = InMemoryStore::with_default_pool();
        store.insert(reservation(1, 1)).unwrap();
        store.insert(reservation(2, 2)).unwrap();

        store.replace(reservation(1, 3)).unwrap();
        assert_eq!(store.reservations().unwrap()[0].table_id, 3);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(!store.contains(1).unwrap());
        assert!(store.contains(2).unwrap());

        assert!(matches!(store.remove(1), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.replace(reservation(7, 1)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = InMemoryStore::with_default_pool();
        for id in [30, 10, 20] {
            store.insert(reservation(id, 1)).unwrap();
        }
        let ids: Vec<i64> = store.reservations().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }
}
