//! Trend, momentum, RSI, moving-average and volatility statistics.
//!
//! Degenerate input never fails here: too few bars resolves to the documented
//! neutral defaults instead of an error.

use crate::models::indicators::{TechnicalIndicatorSet, VolumeTrend};
use crate::models::market::MarketBar;

pub const RSI_PERIOD: usize = 14;
const SHORT_SMA_WINDOW: usize = 20;
const LONG_SMA_WINDOW: usize = 50;
const DEFAULT_VOLATILITY: f64 = 0.02;

/// Coarse trend/momentum score in [0, 1].
///
/// Binary-threshold heuristic with fixed 0.6/0.4 legs: trend compares the
/// latest close against the SMA of the last min(20, n) closes, momentum
/// compares the latest close against the previous one. Fewer than 2 bars
/// scores a neutral 0.5.
pub fn technical_score(bars: &[MarketBar]) -> f64 {
    if bars.len() < 2 {
        return 0.5;
    }

    let last_close = bars[bars.len() - 1].close;
    let prev_close = bars[bars.len() - 2].close;
    let price_change = (last_close - prev_close) / prev_close;

    let window = bars.len().min(SHORT_SMA_WINDOW);
    let sma = sma_of_closes(bars, window);

    let trend_score = if last_close > sma { 0.6 } else { 0.4 };
    let momentum_score = if price_change > 0.0 { 0.6 } else { 0.4 };

    (trend_score + momentum_score) / 2.0
}

/// Wilder-style RSI over the most recent `period` deltas.
///
/// RSI = 100 - 100 / (1 + avg_gain / avg_loss). Fewer than `period + 1` bars
/// returns a neutral 50; a window with no losses returns 100.
pub fn rsi(bars: &[MarketBar], period: usize) -> f64 {
    if bars.len() < period + 1 {
        return 50.0;
    }

    let closes: Vec<f64> = bars[bars.len() - (period + 1)..]
        .iter()
        .map(|b| b.close)
        .collect();

    let mut gains = 0.0;
    let mut losses = 0.0;
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Full indicator set for a bar sequence.
///
/// Below 14 bars the set collapses to the neutral fallback (rsi 50, SMAs at
/// the latest close, zero MACD proxy); the volume trend is computed either
/// way.
pub fn indicator_set(bars: &[MarketBar]) -> TechnicalIndicatorSet {
    let volume_trend = volume_trend(bars);
    let last_close = bars.last().map(|b| b.close).unwrap_or(0.0);

    if bars.len() < RSI_PERIOD {
        return TechnicalIndicatorSet::neutral(last_close, volume_trend);
    }

    let sma_20 = sma_of_closes(bars, bars.len().min(SHORT_SMA_WINDOW));
    let sma_50 = sma_of_closes(bars, bars.len().min(LONG_SMA_WINDOW));
    let macd_proxy = if sma_50 != 0.0 {
        (sma_20 - sma_50) / sma_50 * 100.0
    } else {
        0.0
    };

    TechnicalIndicatorSet {
        rsi: rsi(bars, RSI_PERIOD),
        sma_20,
        sma_50,
        macd_proxy,
        volume_trend,
    }
}

/// Latest volume versus the mean of the last 20 volumes.
pub fn volume_trend(bars: &[MarketBar]) -> VolumeTrend {
    let latest = bars.last().map(|b| b.volume as f64).unwrap_or(0.0);
    let window = &bars[bars.len().saturating_sub(SHORT_SMA_WINDOW)..];
    let average = if window.is_empty() {
        0.0
    } else {
        window.iter().map(|b| b.volume as f64).sum::<f64>() / window.len() as f64
    };

    if latest > average {
        VolumeTrend::Increasing
    } else {
        VolumeTrend::Decreasing
    }
}

/// Population standard deviation of per-bar returns; 0.02 below 2 bars.
pub fn volatility(bars: &[MarketBar]) -> f64 {
    if bars.len() < 2 {
        return DEFAULT_VOLATILITY;
    }

    let returns: Vec<f64> = bars
        .windows(2)
        .map(|pair| (pair[1].close - pair[0].close) / pair[0].close)
        .collect();

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance = returns
        .iter()
        .map(|r| (r - mean).powi(2))
        .sum::<f64>()
        / returns.len() as f64;

    variance.sqrt()
}

fn sma_of_closes(bars: &[MarketBar], window: usize) -> f64 {
    let tail = &bars[bars.len() - window..];
    tail.iter().map(|b| b.close).sum::<f64>() / window as f64
}
