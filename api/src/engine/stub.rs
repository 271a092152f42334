use async_trait::async_trait;
use chrono::Utc;

use crate::engine::{EngineError, SentimentEngine};
use crate::models::{
    AnalyzeResponse, Emotion, EmotionScores, EventItem, Sentiment, SentimentResult,
    SentimentTimelinePoint, TrendDirection, TrendItem,
};

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

/// Placeholder engine answering every call with fixed data.
///
/// Stands in until a real analysis engine exists and is meant to be replaced
/// wholesale, not extended.
#[derive(Debug, Clone)]
pub struct StubEngine {
    max_text_length: usize,
}

impl StubEngine {
    pub fn new() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    #[cfg(test)]
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }
}

impl Default for StubEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentEngine for StubEngine {
    async fn score_topic(&self, topic: &str) -> Result<SentimentResult, EngineError> {
        Ok(SentimentResult {
            topic: topic.to_string(),
            sentiment: Sentiment::Neutral,
            confidence: 0.75,
            timestamp: Utc::now(),
            sample_size: 100,
        })
    }

    async fn list_trends(&self) -> Result<Vec<TrendItem>, EngineError> {
        let now = Utc::now();

        Ok(vec![
            TrendItem {
                topic: "AI Technology".to_string(),
                sentiment: Sentiment::Positive,
                volume: 1250,
                trend_direction: TrendDirection::Up,
                last_updated: now,
            },
            TrendItem {
                topic: "Climate Change".to_string(),
                sentiment: Sentiment::Negative,
                volume: 980,
                trend_direction: TrendDirection::Stable,
                last_updated: now,
            },
        ])
    }

    async fn list_events(&self) -> Result<Vec<EventItem>, EngineError> {
        let now = Utc::now();

        Ok(vec![EventItem {
            event_id: "evt_001".to_string(),
            topic: "Tech Conference 2024".to_string(),
            description: "Major technology conference announcement".to_string(),
            sentiment_timeline: vec![SentimentTimelinePoint {
                timestamp: now,
                sentiment: Sentiment::Positive,
                volume: 150,
            }],
            detected_at: now,
            location: Some("San Francisco".to_string()),
        }])
    }

    async fn analyze_text(&self, text: &str) -> Result<AnalyzeResponse, EngineError> {
        let emotions: EmotionScores = [
            (Emotion::Joy, 0.2),
            (Emotion::Anger, 0.1),
            (Emotion::Fear, 0.1),
            (Emotion::Surprise, 0.3),
            (Emotion::Sadness, 0.1),
            (Emotion::Neutral, 0.2),
        ]
        .into_iter()
        .collect();

        Ok(AnalyzeResponse {
            sentiment: Sentiment::Neutral,
            confidence: 0.68,
            emotions,
            text: text.to_string(),
        })
    }

    fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    fn name(&self) -> &str {
        "stub"
    }
}
