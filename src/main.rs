//! Offline demo: seed the mock series source, run one analysis, print the
//! signal. This is the client-side mock-analysis path, without the server.

use chrono::Utc;
use signalcraft::analysis::AnalysisEngine;
use signalcraft::market::{MarketSeriesSource, MockMarketSeries, DEFAULT_DAYS};
use signalcraft::models::signal::Signal;
use signalcraft::models::strategy::{RiskLevel, Strategy};

fn main() {
    let now = Utc::now();
    let strategy = Strategy {
        id: None,
        user_id: "demo".to_string(),
        name: "Demo momentum strategy".to_string(),
        symbols: vec!["BTC".to_string()],
        risk_level: RiskLevel::Medium,
        stop_loss_percentage: 2.0,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let mut source = MockMarketSeries::new(42);
    let bars = source.bars("BTC", DEFAULT_DAYS);

    let news = vec![
        "Institutional adoption drives strong rally".to_string(),
        "Analysts fear a decline after recent losses".to_string(),
        "Network growth remains positive".to_string(),
    ];

    let signal = AnalysisEngine::analyze(&strategy, &bars, &news);
    print_signal(&signal);
}

fn print_signal(signal: &Signal) {
    println!("  Symbol: {}", signal.symbol);
    println!("  Action: {}", signal.action);
    println!("  Confidence: {:.2}%", signal.confidence * 100.0);
    println!("  Price target: ${:.2}", signal.price_target);
    println!("  Stop loss: ${:.2}", signal.stop_loss);
    println!("  RSI: {:.2}", signal.technical_indicators.rsi);
    println!(
        "  MACD proxy: {:.4}%",
        signal.technical_indicators.macd_proxy
    );
    println!(
        "  Sentiment: {} (score {:.2}, {} sources)",
        signal.sentiment_analysis.overall_sentiment,
        signal.sentiment_analysis.score,
        signal.sentiment_analysis.sources_analyzed
    );
    println!("  Rationale: {}", signal.rationale);
}
