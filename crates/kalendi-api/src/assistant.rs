//! Assistant operations backed by the ML service.

use tracing::instrument;

use kalendi_ml::{
    EventInput, MlClient, MlError, ParsedEvent, Preferences, ScheduleOptimization,
};

/// User id substituted until authentication exists.
const DEFAULT_USER_ID: &str = "default-user";

/// Placeholder returned when the ML service cannot produce a parse.
fn fallback_event() -> ParsedEvent {
    ParsedEvent {
        title: "Sample Event".to_string(),
        description: "ML Service is not available. This is a mock response.".to_string(),
        start_time: "2025-08-01T14:00:00Z".to_string(),
        end_time: "2025-08-01T15:00:00Z".to_string(),
        location: "Conference Room".to_string(),
    }
}

pub struct Assistant {
    ml: MlClient,
}

impl Assistant {
    pub fn new(ml: MlClient) -> Self {
        Self { ml }
    }

    /// Parse a natural-language description into an event.
    ///
    /// This operation never fails: when the ML service is unreachable,
    /// returns a malformed body, or has no suggestion to offer, the
    /// caller gets a fixed placeholder event instead of an error.
    #[instrument(skip(self), level = "info")]
    pub async fn parse_natural_language_event(&self, text: &str) -> ParsedEvent {
        match self.try_parse_event(text).await {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!("Falling back to placeholder event: {}", err);
                fallback_event()
            }
        }
    }

    /// The fallible inner pipeline: encode, call the gateway, decode.
    async fn try_parse_event(&self, text: &str) -> Result<ParsedEvent, MlError> {
        let response = self.ml.parse_event(text, DEFAULT_USER_ID).await?;
        ParsedEvent::from_response(response)
    }

    /// Ask the ML service for an optimized schedule.
    ///
    /// Unlike [`Self::parse_natural_language_event`] this propagates
    /// failures; callers see transport and decode errors directly.
    #[instrument(skip(self, events, preferences), level = "info")]
    pub async fn optimize_schedule(
        &self,
        events: &[EventInput],
        preferences: Option<&Preferences>,
    ) -> Result<ScheduleOptimization, MlError> {
        let response = self.ml.optimize_schedule(events, preferences).await?;
        Ok(ScheduleOptimization::from_response(response))
    }

    /// Generate a meeting summary from a caller-supplied document.
    #[instrument(skip(self, details), level = "info")]
    pub async fn generate_meeting_summary(
        &self,
        details: &serde_json::Value,
    ) -> Result<String, MlError> {
        self.ml.generate_summary(details).await
    }

    /// Whether the ML service reports itself as configured.
    pub async fn ml_service_healthy(&self) -> bool {
        self.ml.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalendi_core::MlConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn assistant_for(base_url: &str) -> Assistant {
        let config = MlConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        };
        Assistant::new(MlClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_parse_returns_first_suggestion() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ai/parse-event"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "suggestions": [
                    {
                        "title": "Lunch with Sam",
                        "description": "Catch up",
                        "start_time": "2025-08-02T12:00:00Z",
                        "end_time": "2025-08-02T13:00:00Z",
                        "location": "Cafe"
                    },
                    {
                        "title": "Second guess",
                        "start_time": "2025-08-02T13:00:00Z",
                        "end_time": "2025-08-02T14:00:00Z"
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let assistant = assistant_for(&mock_server.uri());
        let event = assistant
            .parse_natural_language_event("lunch with Sam tomorrow")
            .await;

        assert_eq!(event.title, "Lunch with Sam");
        assert_eq!(event.location, "Cafe");
    }

    #[tokio::test]
    async fn test_parse_falls_back_on_empty_suggestions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ai/parse-event"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"suggestions": []})),
            )
            .mount(&mock_server)
            .await;

        let assistant = assistant_for(&mock_server.uri());
        let event = assistant.parse_natural_language_event("gibberish").await;

        assert_eq!(event.title, "Sample Event");
        assert_eq!(event.location, "Conference Room");
    }

    #[tokio::test]
    async fn test_parse_falls_back_on_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ai/parse-event"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let assistant = assistant_for(&mock_server.uri());
        let event = assistant.parse_natural_language_event("lunch").await;

        assert_eq!(event.title, "Sample Event");
    }

    #[tokio::test]
    async fn test_optimize_propagates_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ai/optimize-schedule"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let assistant = assistant_for(&mock_server.uri());
        let result = assistant.optimize_schedule(&[], None).await;

        assert!(matches!(result, Err(MlError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_optimize_decodes_schedule() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ai/optimize-schedule"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "ok",
                "data": {
                    "optimized_schedule": [
                        {
                            "original_id": "ev1",
                            "title": "Standup",
                            "start_time": "2025-08-01T09:30:00Z",
                            "end_time": "2025-08-01T09:45:00Z",
                            "suggestion": "Move after focus block"
                        }
                    ]
                }
            })))
            .mount(&mock_server)
            .await;

        let assistant = assistant_for(&mock_server.uri());
        let optimization = assistant.optimize_schedule(&[], None).await.unwrap();

        assert!(optimization.success);
        assert_eq!(optimization.optimized_events.len(), 1);
        assert_eq!(
            optimization.optimized_events[0].original_id.as_deref(),
            Some("ev1")
        );
    }
}
