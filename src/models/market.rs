use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-period OHLCV observation.
///
/// Sequences are ordered by non-decreasing date; gaps are neither assumed
/// nor enforced. Bars are produced per analysis request and discarded after
/// the scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl MarketBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
