//! Combines the technical and sentiment scores into a directional signal.

use chrono::Utc;

use crate::models::indicators::TechnicalIndicatorSet;
use crate::models::sentiment::{SentimentLabel, SentimentResult};
use crate::models::signal::{Signal, SignalAction};
use crate::models::strategy::Strategy;

/// Weight of the technical score in the combined score; sentiment takes
/// the remainder.
const TECHNICAL_WEIGHT: f64 = 0.6;
const SENTIMENT_WEIGHT: f64 = 0.4;

/// Action threshold: BUY above it, SELL below its complement.
const ACTION_THRESHOLD: f64 = 0.6;

const CONFIDENCE_CAP: f64 = 0.95;

/// Inputs to one synthesis call, all precomputed by the upstream stages.
#[derive(Debug, Clone)]
pub struct SynthesisInput {
    pub technical_score: f64,
    pub sentiment: SentimentResult,
    pub last_close: f64,
    pub volatility: f64,
}

pub fn combined_score(technical_score: f64, sentiment_score: f64) -> f64 {
    technical_score * TECHNICAL_WEIGHT + sentiment_score * SENTIMENT_WEIGHT
}

/// Action selection is exhaustive and mutually exclusive over [0, 1]:
/// BUY iff combined > 0.6, SELL iff combined < 0.4, HOLD otherwise.
pub fn select_action(combined: f64) -> SignalAction {
    if combined > ACTION_THRESHOLD {
        SignalAction::Buy
    } else if combined < 1.0 - ACTION_THRESHOLD {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    }
}

/// Synthesize the final signal for a strategy.
pub fn synthesize(
    strategy: &Strategy,
    input: SynthesisInput,
    indicators: TechnicalIndicatorSet,
) -> Signal {
    let combined = combined_score(input.technical_score, input.sentiment.score);
    let action = select_action(combined);
    let confidence = ((combined - 0.5).abs() * 2.0).min(CONFIDENCE_CAP);

    let price_target = match action {
        SignalAction::Buy => input.last_close * (1.0 + input.volatility * 2.0),
        SignalAction::Sell => input.last_close * (1.0 - input.volatility * 2.0),
        SignalAction::Hold => input.last_close,
    };

    let stop_loss = match action {
        SignalAction::Buy => input.last_close * (1.0 - strategy.stop_loss_percentage / 100.0),
        SignalAction::Sell => input.last_close * (1.0 + strategy.stop_loss_percentage / 100.0),
        SignalAction::Hold => input.last_close,
    };

    // The sentiment label is deliberately classified from the combined score,
    // not the sentiment score alone.
    let label = SentimentLabel::from_combined(combined);
    let sentiment_analysis = SentimentResult {
        overall_sentiment: label,
        ..input.sentiment
    };

    let rationale = format!(
        "Technical analysis shows {:.0}% bullish signals. Market sentiment is {}. Strategy risk level: {}.",
        input.technical_score * 100.0,
        label,
        strategy.risk_level,
    );

    Signal {
        symbol: strategy.primary_symbol().to_string(),
        action,
        confidence,
        price_target,
        stop_loss,
        rationale,
        timestamp: Utc::now(),
        technical_indicators: indicators,
        sentiment_analysis,
    }
}
