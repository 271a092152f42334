// Sentiment engine abstraction used by the API gateway
use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AnalyzeResponse, EventItem, SentimentResult, TrendItem};

mod stub;
#[cfg(test)]
pub mod testing;

pub use stub::StubEngine;

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Engine failure: {0}")]
    Internal(String),
}

/// Anything able to answer sentiment questions for the gateway.
///
/// Implementations receive input that has already passed request validation.
/// Failures must be reported as errors; an engine must never answer with a
/// default neutral result in place of a failure.
#[async_trait]
pub trait SentimentEngine: Send + Sync {
    async fn score_topic(&self, topic: &str) -> Result<SentimentResult, EngineError>;

    /// Trending topics in engine ranking order
    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError>;

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError>;

    async fn analyze_text(&self, text: &str) -> Result<AnalyzeResponse, EngineError>;

    /// Longest text, in characters, accepted by `analyze_text`
    fn max_text_length(&self) -> usize;

    fn name(&self) -> &str;
}
