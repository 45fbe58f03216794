//! ML service types and data structures.
//!
//! Domain types are what the rest of the application works with; wire
//! types mirror the JSON documents exchanged with the ML service.
//! Conversions between the two live here and do no I/O.

use serde::{Deserialize, Serialize};

use crate::error::MlError;

/// Calendar event as supplied by the API caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

/// Working-hours window, e.g. "09:00" to "17:00".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Scheduling preferences. Every field is optional; absent fields are
/// left out of the outbound payload entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub working_hours: Option<WorkingHours>,
    pub preferred_meeting_duration: Option<u32>,
}

/// Event extracted from natural language by the ML service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEvent {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

/// A single slot in an optimized schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedEvent {
    pub original_id: Option<String>,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub suggestion: Option<String>,
}

/// Result of a schedule optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOptimization {
    pub success: bool,
    pub message: String,
    pub optimized_events: Vec<OptimizedEvent>,
}

// Wire Request Types

/// Body of `POST /ai/parse-event`.
#[derive(Debug, Serialize)]
pub struct ParseEventRequest<'a> {
    pub text: &'a str,
    pub user_id: &'a str,
}

/// Body of `POST /ai/optimize-schedule`.
#[derive(Debug, Serialize)]
pub struct OptimizeRequest {
    pub events: Vec<WireEvent>,
    pub preferences: WirePreferences,
}

/// Event as sent on the wire.
#[derive(Debug, Serialize)]
pub struct WireEvent {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
}

/// Preferences as sent on the wire. Absent preferences encode to the
/// empty object, never null.
#[derive(Debug, Default, Serialize)]
pub struct WirePreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_meeting_duration: Option<u32>,
}

impl From<&EventInput> for WireEvent {
    fn from(event: &EventInput) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            location: event.location.clone(),
        }
    }
}

impl From<Option<&Preferences>> for WirePreferences {
    fn from(preferences: Option<&Preferences>) -> Self {
        match preferences {
            Some(p) => Self {
                working_hours: p.working_hours.clone(),
                preferred_meeting_duration: p.preferred_meeting_duration,
            },
            None => Self::default(),
        }
    }
}

// Wire Response Types

/// Response of `POST /ai/parse-event`.
#[derive(Debug, Deserialize)]
pub struct ParseEventResponse {
    #[serde(default)]
    pub suggestions: Vec<WireSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct WireSuggestion {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: String,
}

/// Response envelope of `POST /ai/optimize-schedule`.
#[derive(Debug, Deserialize)]
pub struct OptimizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<OptimizeData>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeData {
    pub optimized_schedule: Option<Vec<WireOptimizedEvent>>,
}

#[derive(Debug, Deserialize)]
pub struct WireOptimizedEvent {
    pub original_id: Option<String>,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub suggestion: Option<String>,
}

/// Response of `POST /ai/generate-summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub data: SummaryData,
}

#[derive(Debug, Deserialize)]
pub struct SummaryData {
    pub summary: String,
}

/// Response of `GET /ai/test`.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub openai_configured: bool,
}

impl ParsedEvent {
    /// Take the first suggestion from a parse response.
    ///
    /// An empty suggestions array is the one decode condition that
    /// fails rather than degrading to a default.
    pub fn from_response(response: ParseEventResponse) -> Result<Self, MlError> {
        let first = response
            .suggestions
            .into_iter()
            .next()
            .ok_or(MlError::NoSuggestions)?;

        Ok(Self {
            title: first.title,
            description: first.description,
            start_time: first.start_time,
            end_time: first.end_time,
            location: first.location,
        })
    }
}

impl From<WireOptimizedEvent> for OptimizedEvent {
    fn from(wire: WireOptimizedEvent) -> Self {
        Self {
            original_id: wire.original_id,
            title: wire.title,
            start_time: wire.start_time,
            end_time: wire.end_time,
            suggestion: wire.suggestion,
        }
    }
}

impl ScheduleOptimization {
    /// Convert the wire envelope into the typed result.
    ///
    /// A missing `data` or `optimized_schedule` yields an empty event
    /// list; per-element required fields are enforced earlier, when the
    /// body is deserialized.
    pub fn from_response(response: OptimizeResponse) -> Self {
        let optimized_events = response
            .data
            .and_then(|d| d.optimized_schedule)
            .unwrap_or_default()
            .into_iter()
            .map(OptimizedEvent::from)
            .collect();

        Self {
            success: response.success,
            message: response.message,
            optimized_events,
        }
    }
}
