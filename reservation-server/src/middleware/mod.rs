//! HTTP middleware

pub mod logging;
pub mod panic;
pub mod timeout;

pub use logging::logging_middleware;
pub use panic::handle_panic;
pub use timeout::handle_timeout_error;
