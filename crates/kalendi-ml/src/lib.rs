//! ML service gateway for Kalendi.
//!
//! Translates typed calendar records to and from the JSON contract of
//! the external ML service, and performs the HTTP calls.

pub mod client;
pub mod error;
pub mod types;

pub use client::MlClient;
pub use error::MlError;
pub use types::{
    EventInput, OptimizedEvent, ParsedEvent, Preferences, ScheduleOptimization, WorkingHours,
};
