use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicators::TechnicalIndicatorSet;
use super::sentiment::SentimentResult;

/// Directional recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl SignalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::Hold => "HOLD",
        }
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The synthesized recommendation for one analysis call.
///
/// Produced once, never mutated. `price_target` and `stop_loss` are in the
/// same unit as the close price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub action: SignalAction,
    pub confidence: f64,
    pub price_target: f64,
    pub stop_loss: f64,
    pub rationale: String,
    pub timestamp: DateTime<Utc>,
    pub technical_indicators: TechnicalIndicatorSet,
    pub sentiment_analysis: SentimentResult,
}

/// Immutable feedback row handed to the store after a signal is synthesized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub user_id: String,
    pub strategy_id: i64,
    pub action: SignalAction,
    pub symbol: String,
    pub confidence: f64,
    pub price_target: f64,
    pub stop_loss: f64,
    pub rationale: String,
    pub technical_indicators: TechnicalIndicatorSet,
    pub sentiment_analysis: SentimentResult,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn from_signal(signal: &Signal, user_id: &str, strategy_id: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            strategy_id,
            action: signal.action,
            symbol: signal.symbol.clone(),
            confidence: signal.confidence,
            price_target: signal.price_target,
            stop_loss: signal.stop_loss,
            rationale: signal.rationale.clone(),
            technical_indicators: signal.technical_indicators.clone(),
            sentiment_analysis: signal.sentiment_analysis.clone(),
            created_at: signal.timestamp,
        }
    }
}
