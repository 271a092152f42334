use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, error, warn};
use tokio::time::timeout;

use crate::config::EngineSettings;
use crate::engine::{EngineError, SentimentEngine};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ApiError, Emotion, EventItem, HealthResponse, HealthStatus,
    SentimentResult, TrendItem,
};

/// Validates requests, delegates to the sentiment engine and checks its answers
#[derive(Clone)]
pub struct SentimentService {
    engine: Arc<dyn SentimentEngine>,
    engine_timeout: Duration,
}

impl SentimentService {
    pub fn new(engine: Arc<dyn SentimentEngine>, settings: EngineSettings) -> Self {
        Self {
            engine,
            engine_timeout: settings.timeout,
        }
    }

    /// Get the current sentiment for a topic
    pub async fn get_sentiment(&self, topic: &str) -> Result<SentimentResult, ApiError> {
        if topic.trim().is_empty() {
            return Err(ApiError::validation("topic", "must not be empty"));
        }

        let result = self
            .call_engine("score_topic", self.engine.score_topic(topic))
            .await?;

        check_unit_interval("confidence", result.confidence)?;
        Ok(result)
    }

    /// Get trending topics in the order the engine ranks them
    pub async fn get_trends(&self) -> Result<Vec<TrendItem>, ApiError> {
        self.call_engine("list_trends", self.engine.list_trends()).await
    }

    /// Get detected events with their sentiment timelines
    pub async fn get_events(&self) -> Result<Vec<EventItem>, ApiError> {
        let events = self
            .call_engine("list_events", self.engine.list_events())
            .await?;

        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.event_id.as_str()) {
                return Err(ApiError::Internal(format!(
                    "engine returned duplicate event id {}",
                    event.event_id
                )));
            }

            let ordered = event
                .sentiment_timeline
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp);
            if !ordered {
                return Err(ApiError::Internal(format!(
                    "engine returned an unordered timeline for event {}",
                    event.event_id
                )));
            }
        }

        Ok(events)
    }

    /// Analyze free text for sentiment and emotions
    pub async fn analyze_text(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
        if request.text.trim().is_empty() {
            warn!("Rejected analyze request with blank text");
            return Err(ApiError::validation("text", "must not be empty"));
        }

        let max_length = self.engine.max_text_length();
        let length = request.text.chars().count();
        if length > max_length {
            warn!("Rejected analyze request of {} characters", length);
            return Err(ApiError::validation(
                "text",
                format!("must be at most {} characters, got {}", max_length, length),
            ));
        }

        let response = self
            .call_engine("analyze_text", self.engine.analyze_text(&request.text))
            .await?;

        check_unit_interval("confidence", response.confidence)?;

        for emotion in Emotion::ALL {
            match response.emotions.get(&emotion) {
                Some(score) => check_unit_interval("emotion score", *score)?,
                None => {
                    return Err(ApiError::Internal(format!(
                        "engine omitted emotion {:?}",
                        emotion
                    )))
                }
            }
        }

        if response.text != request.text {
            return Err(ApiError::Internal(
                "engine did not echo the analyzed text".to_string(),
            ));
        }

        Ok(response)
    }

    /// Liveness of this process; never consults the engine
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
        }
    }

    /// Run an engine call under the configured deadline
    async fn call_engine<T, F>(&self, operation: &str, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, EngineError>>,
    {
        debug!("Calling {} engine: {}", self.engine.name(), operation);

        match timeout(self.engine_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                match &e {
                    EngineError::NotFound(_) | EngineError::InvalidInput { .. } => {
                        warn!("Engine {} rejected {}: {}", self.engine.name(), operation, e)
                    }
                    EngineError::Unavailable(_) => {
                        error!("Engine {} failed {}: {}", self.engine.name(), operation, e)
                    }
                    // logged by ApiError::error_response
                    EngineError::Internal(_) => {}
                }
                Err(e.into())
            }
            Err(_) => {
                error!(
                    "Engine {} timed out on {} after {:?}",
                    self.engine.name(),
                    operation,
                    self.engine_timeout
                );
                Err(ApiError::EngineUnavailable(format!(
                    "{} did not answer within {:?}",
                    operation, self.engine_timeout
                )))
            }
        }
    }
}

fn check_unit_interval(what: &str, value: f64) -> Result<(), ApiError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ApiError::Internal(format!(
            "engine returned {} {} outside [0, 1]",
            what, value
        )))
    }
}
