//! Reservations - 餐桌预订
//!
//! # 模块结构
//!
//! ```text
//! reservations/
//! ├── clock.rs      # "now" source
//! ├── resolver.rs   # first-fit table selection
//! ├── store/        # ReservationStore trait + in-memory backend
//! └── manager/      # lifecycle rules and locking
//! ```

pub mod clock;
pub mod manager;
pub mod resolver;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use manager::{
    ManagerStats, ReservationError, ReservationManager, ReservationResult, Rescheduled,
};
pub use store::{InMemoryStore, ReservationStore, StoreError, StoreResult};
