//! HTTP client for the external ML service.

use std::time::Duration;

use tracing::instrument;

use kalendi_core::MlConfig;

use crate::error::MlError;
use crate::types::*;

pub struct MlClient {
    client: reqwest::Client,
    base_url: String,
}

impl MlClient {
    pub fn new(config: &MlConfig) -> Result<Self, MlError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse natural-language text into event suggestions.
    #[instrument(skip(self), level = "info")]
    pub async fn parse_event(
        &self,
        text: &str,
        user_id: &str,
    ) -> Result<ParseEventResponse, MlError> {
        let url = format!("{}/ai/parse-event", self.base_url);
        let body = ParseEventRequest { text, user_id };

        let response = self.client.post(&url).json(&body).send().await?;
        self.handle_response(response).await
    }

    /// Request an optimized schedule for the given events.
    #[instrument(skip(self, events, preferences), level = "info")]
    pub async fn optimize_schedule(
        &self,
        events: &[EventInput],
        preferences: Option<&Preferences>,
    ) -> Result<OptimizeResponse, MlError> {
        let url = format!("{}/ai/optimize-schedule", self.base_url);
        let body = OptimizeRequest {
            events: events.iter().map(WireEvent::from).collect(),
            preferences: WirePreferences::from(preferences),
        };

        let response = self.client.post(&url).json(&body).send().await?;
        self.handle_response(response).await
    }

    /// Generate a meeting summary from a caller-supplied document.
    #[instrument(skip(self, meeting_details), level = "info")]
    pub async fn generate_summary(
        &self,
        meeting_details: &serde_json::Value,
    ) -> Result<String, MlError> {
        let url = format!("{}/ai/generate-summary", self.base_url);

        let response = self.client.post(&url).json(meeting_details).send().await?;
        let summary: SummaryResponse = self.handle_response(response).await?;
        Ok(summary.data.summary)
    }

    /// Probe the ML service.
    ///
    /// Never fails: any transport or decode problem reads as "not
    /// healthy".
    #[instrument(skip(self), level = "info")]
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/ai/test", self.base_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("ML service health probe failed: {}", err);
                return false;
            }
        };

        match self.handle_response::<HealthResponse>(response).await {
            Ok(health) => health.openai_configured,
            Err(err) => {
                tracing::warn!("ML service health probe failed: {}", err);
                false
            }
        }
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, MlError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| MlError::Decode(format!("JSON parse error: {}", e)))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(MlError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
