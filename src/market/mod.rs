//! Market bar sources. The only implementation synthesizes data; a live
//! feed would slot in behind the same trait.

pub mod generator;

pub use generator::{MarketSeriesSource, MockMarketSeries, DEFAULT_DAYS};
