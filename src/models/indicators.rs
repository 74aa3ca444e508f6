use serde::{Deserialize, Serialize};

/// Latest-volume-versus-average direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
}

/// Derived statistics for one market bar sequence.
///
/// `macd_proxy` is the percentage spread between the two SMAs, not the
/// canonical exponential MACD. With fewer than 14 bars the set falls back to
/// neutral defaults: rsi 50, both SMAs at the latest close, macd_proxy 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalIndicatorSet {
    pub rsi: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub macd_proxy: f64,
    pub volume_trend: VolumeTrend,
}

impl TechnicalIndicatorSet {
    /// Neutral fallback used when the series is too short to be meaningful.
    pub fn neutral(last_close: f64, volume_trend: VolumeTrend) -> Self {
        Self {
            rsi: 50.0,
            sma_20: last_close,
            sma_50: last_close,
            macd_proxy: 0.0,
            volume_trend,
        }
    }
}
