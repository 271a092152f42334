use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Polarity of a piece of text or of aggregated opinion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Direction of a trend's volume over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// The fixed set of emotion labels reported by text analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Surprise,
    Sadness,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Sadness,
        Emotion::Neutral,
    ];
}

/// Independent emotion intensities, each in [0, 1]
pub type EmotionScores = BTreeMap<Emotion, f64>;

/// Response for the /api/sentiment/{topic} endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub topic: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub sample_size: u64,
}

/// Single trending topic for the /api/trends endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub topic: String,
    pub sentiment: Sentiment,
    pub volume: u64,
    pub trend_direction: TrendDirection,
    pub last_updated: DateTime<Utc>,
}

/// One point of an event's sentiment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub volume: u64,
}

/// Detected event for the /api/events endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub event_id: String,
    pub topic: String,
    pub description: String,
    /// Ordered by timestamp, oldest first
    pub sentiment_timeline: Vec<SentimentTimelinePoint>,
    pub detected_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Request for the /api/analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Response for the /api/analyze endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub emotions: EmotionScores,
    pub text: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Response for the /health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
}

/// Response for the / endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}
