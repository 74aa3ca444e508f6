//! The scoring pipeline: technical statistics, keyword sentiment, and
//! signal synthesis. Every stage is a pure function over in-memory data.

pub mod engine;
pub mod sentiment;
pub mod synthesis;
pub mod technical;

pub use engine::AnalysisEngine;
