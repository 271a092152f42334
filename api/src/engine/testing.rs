// Engine doubles shared by service and handler tests
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};

use crate::engine::{EngineError, SentimentEngine, StubEngine};
use crate::models::{
    AnalyzeResponse, Emotion, EventItem, Sentiment, SentimentResult, SentimentTimelinePoint,
    TrendItem,
};

/// Fails every call with a fresh copy of the configured error
pub struct FailingEngine {
    make_error: fn() -> EngineError,
}

impl FailingEngine {
    pub fn unavailable() -> Self {
        Self {
            make_error: || EngineError::Unavailable("model server down".to_string()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            make_error: || EngineError::NotFound("topic is not tracked".to_string()),
        }
    }

    pub fn internal() -> Self {
        Self {
            make_error: || EngineError::Internal("tokenizer panicked".to_string()),
        }
    }
}

#[async_trait]
impl SentimentEngine for FailingEngine {
    async fn score_topic(&self, _topic: &str) -> Result<SentimentResult, EngineError> {
        Err((self.make_error)())
    }

    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError> {
        Err((self.make_error)())
    }

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError> {
        Err((self.make_error)())
    }

    async fn analyze_text(&self, _text: &str) -> Result<AnalyzeResponse, EngineError> {
        Err((self.make_error)())
    }

    fn max_text_length(&self) -> usize {
        100
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Answers like the stub, but only after a delay
pub struct SlowEngine {
    delay: Duration,
    inner: StubEngine,
}

impl SlowEngine {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: StubEngine::new(),
        }
    }
}

#[async_trait]
impl SentimentEngine for SlowEngine {
    async fn score_topic(&self, topic: &str) -> Result<SentimentResult, EngineError> {
        tokio::time::sleep(self.delay).await;
        self.inner.score_topic(topic).await
    }

    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_trends().await
    }

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_events().await
    }

    async fn analyze_text(&self, text: &str) -> Result<AnalyzeResponse, EngineError> {
        tokio::time::sleep(self.delay).await;
        self.inner.analyze_text(text).await
    }

    fn max_text_length(&self) -> usize {
        self.inner.max_text_length()
    }

    fn name(&self) -> &str {
        "slow"
    }
}

/// Returns answers that break the response contract
pub struct MisbehavingEngine;

#[async_trait]
impl SentimentEngine for MisbehavingEngine {
    async fn score_topic(&self, topic: &str) -> Result<SentimentResult, EngineError> {
        Ok(SentimentResult {
            topic: topic.to_string(),
            sentiment: Sentiment::Positive,
            confidence: 1.7,
            timestamp: Utc::now(),
            sample_size: 3,
        })
    }

    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError> {
        Ok(Vec::new())
    }

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError> {
        let now = Utc::now();
        let earlier = now - ChronoDuration::minutes(5);

        Ok(vec![EventItem {
            event_id: "evt_900".to_string(),
            topic: "Outage".to_string(),
            description: "Timeline out of order".to_string(),
            sentiment_timeline: vec![
                SentimentTimelinePoint {
                    timestamp: now,
                    sentiment: Sentiment::Negative,
                    volume: 40,
                },
                SentimentTimelinePoint {
                    timestamp: earlier,
                    sentiment: Sentiment::Neutral,
                    volume: 10,
                },
            ],
            detected_at: now,
            location: None,
        }])
    }

    async fn analyze_text(&self, _text: &str) -> Result<AnalyzeResponse, EngineError> {
        Ok(AnalyzeResponse {
            sentiment: Sentiment::Negative,
            confidence: 0.4,
            emotions: [(Emotion::Anger, 0.9)].into_iter().collect(),
            text: "something else".to_string(),
        })
    }

    fn max_text_length(&self) -> usize {
        1000
    }

    fn name(&self) -> &str {
        "misbehaving"
    }
}

/// Healthy engine with nothing to report
pub struct QuietEngine;

#[async_trait]
impl SentimentEngine for QuietEngine {
    async fn score_topic(&self, topic: &str) -> Result<SentimentResult, EngineError> {
        StubEngine::new().score_topic(topic).await
    }

    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError> {
        Ok(Vec::new())
    }

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError> {
        Ok(Vec::new())
    }

    async fn analyze_text(&self, text: &str) -> Result<AnalyzeResponse, EngineError> {
        StubEngine::new().analyze_text(text).await
    }

    fn max_text_length(&self) -> usize {
        1000
    }

    fn name(&self) -> &str {
        "quiet"
    }
}
