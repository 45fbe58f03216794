//! API facade for Kalendi.
//!
//! Assistant operations backed by the ML service, plus calendar
//! storage for the CRUD queries.

pub mod assistant;
pub mod store;

pub use assistant::Assistant;
pub use store::{Calendar, CalendarStore, CreateCalendarInput, InMemoryStore, User};

/// Liveness answer for the health query.
pub fn health() -> &'static str {
    "UP"
}
