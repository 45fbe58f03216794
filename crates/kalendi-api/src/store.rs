//! In-memory calendar storage.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Account owning calendars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    /// Stand-in account until real authentication exists.
    pub fn current() -> Self {
        Self {
            id: "1".to_string(),
            email: "test@kalendi.dev".to_string(),
            name: "Test User".to_string(),
        }
    }
}

/// Calendar record, lifetime = process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: User,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCalendarInput {
    pub name: String,
    pub description: Option<String>,
}

/// Storage seam for calendars so the assistant core can be tested
/// without any storage behind it.
pub trait CalendarStore: Send + Sync {
    fn create(&self, input: CreateCalendarInput) -> Calendar;
    fn list(&self) -> Vec<Calendar>;
}

/// List-backed store guarded for concurrent callers.
#[derive(Default)]
pub struct InMemoryStore {
    calendars: Mutex<Vec<Calendar>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalendarStore for InMemoryStore {
    fn create(&self, input: CreateCalendarInput) -> Calendar {
        let mut calendars = self.calendars.lock();
        let calendar = Calendar {
            id: (calendars.len() + 1).to_string(),
            name: input.name,
            description: input.description,
            owner: User::current(),
            created_at: Utc::now(),
        };
        calendars.push(calendar.clone());
        calendar
    }

    fn list(&self) -> Vec<Calendar> {
        self.calendars.lock().clone()
    }
}
