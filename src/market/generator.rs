//! Synthetic OHLCV generator.
//!
//! Deterministic shape (base price plus a linear trend ramp) with uniform
//! per-bar noise. The generator is seeded so a given seed always reproduces
//! the same series, unlike the unseeded randomness it replaces.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::market::MarketBar;

pub const DEFAULT_DAYS: usize = 50;

const BASE_PRICE: f64 = 50_000.0;
const TREND_PER_DAY: f64 = 100.0;
const NOISE_RANGE: f64 = 1_000.0;
const SPREAD_RANGE: f64 = 500.0;

/// Supplies a time-ordered bar sequence for a symbol.
pub trait MarketSeriesSource {
    fn bars(&mut self, symbol: &str, days: usize) -> Vec<MarketBar>;
}

/// Seedable mock series source.
pub struct MockMarketSeries {
    rng: StdRng,
}

impl MockMarketSeries {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the current time, for callers that don't care about
    /// reproducibility.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn generate(&mut self, days: usize) -> Vec<MarketBar> {
        let start = Utc::now().date_naive() - Duration::days(days as i64);
        let mut bars = Vec::with_capacity(days);

        for day in 0..days {
            let trend = day as f64 * TREND_PER_DAY;
            let noise = self.rng.gen_range(-NOISE_RANGE / 2.0..=NOISE_RANGE / 2.0);
            let close = (BASE_PRICE + trend + noise).max(1.0);

            let open = close + self.rng.gen_range(-SPREAD_RANGE / 2.0..=SPREAD_RANGE / 2.0);
            let high = close.max(open) + self.rng.gen_range(0.0..=SPREAD_RANGE);
            let low = (close.min(open) - self.rng.gen_range(0.0..=SPREAD_RANGE)).max(1.0);
            let volume = self.rng.gen_range(500_000..=1_500_000);

            bars.push(MarketBar::new(
                date_for(start, day),
                open,
                high,
                low,
                close,
                volume,
            ));
        }

        bars
    }
}

impl MarketSeriesSource for MockMarketSeries {
    fn bars(&mut self, _symbol: &str, days: usize) -> Vec<MarketBar> {
        self.generate(days)
    }
}

fn date_for(start: NaiveDate, day: usize) -> NaiveDate {
    start + Duration::days(day as i64)
}
