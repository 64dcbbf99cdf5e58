//! Data models
//!
//! Shared between reservation-server and API clients.
//! JSON field names are camelCase; instants are RFC 3339 UTC strings.

pub mod dining_table;
pub mod reservation;
pub mod views;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
pub use views::*;
