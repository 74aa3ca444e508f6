//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod sentiment;
pub mod signal;
pub mod strategy;

pub use indicators::{TechnicalIndicatorSet, VolumeTrend};
pub use market::MarketBar;
pub use sentiment::{SentimentLabel, SentimentResult};
pub use signal::{FeedbackRecord, Signal, SignalAction};
pub use strategy::{RiskLevel, Strategy};
