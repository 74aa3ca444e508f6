//! Orchestrates the scoring pipeline for one analysis call.

use tracing::debug;

use crate::analysis::{sentiment, synthesis, technical};
use crate::models::market::MarketBar;
use crate::models::signal::Signal;
use crate::models::strategy::Strategy;

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Run the full pipeline: technical and sentiment scoring are
    /// independent, then the synthesizer combines them into one signal.
    ///
    /// Pure and total: degenerate inputs (empty bars, no news) resolve to
    /// the documented neutral defaults rather than errors.
    pub fn analyze(strategy: &Strategy, bars: &[MarketBar], news: &[String]) -> Signal {
        let technical_score = technical::technical_score(bars);
        let sentiment = sentiment::analyze_sentiment(news);
        let indicators = technical::indicator_set(bars);
        let volatility = technical::volatility(bars);
        let last_close = bars.last().map(|b| b.close).unwrap_or(0.0);

        debug!(
            symbol = strategy.primary_symbol(),
            technical_score,
            sentiment_score = sentiment.score,
            volatility,
            bars = bars.len(),
            "pipeline stages complete"
        );

        synthesis::synthesize(
            strategy,
            synthesis::SynthesisInput {
                technical_score,
                sentiment,
                last_close,
                volatility,
            },
            indicators,
        )
    }
}
