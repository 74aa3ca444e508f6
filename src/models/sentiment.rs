use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall sentiment classification.
///
/// The label is not derived from the keyword score in isolation: the signal
/// synthesizer assigns it from the combined score, so a freshly analyzed
/// result carries `Neutral` until synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Classify from the combined technical/sentiment score.
    pub fn from_combined(combined: f64) -> Self {
        if combined > 0.6 {
            SentimentLabel::Positive
        } else if combined < 0.4 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Keyword-polarity sentiment over a batch of news snippets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub overall_sentiment: SentimentLabel,
    /// Fraction of polarity-word hits that are positive, 0.5 when no hits.
    pub score: f64,
    pub sources_analyzed: usize,
}
