//! Signalcraft - on-demand trading-signal scoring service
//!
//! A strategy record plus a market bar series and a set of news snippets go
//! in; a BUY/SELL/HOLD recommendation with confidence, price target and stop
//! loss comes out. The scoring pipeline itself is pure and synchronous; the
//! HTTP layer, persistence store and identity provider live at the edges.

pub mod analysis;
pub mod config;
pub mod core;
pub mod db;
pub mod logging;
pub mod market;
pub mod metrics;
pub mod models;
pub mod services;
