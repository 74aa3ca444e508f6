//! Database operations for strategies and signal feedback.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::{Client, NoTls};

use super::{SignalStore, StoreError};
use crate::config;
use crate::models::sentiment::SentimentResult;
use crate::models::signal::{FeedbackRecord, SignalAction};
use crate::models::strategy::{RiskLevel, Strategy};

pub struct PostgresStore {
    client: Arc<RwLock<Option<Client>>>,
}

impl PostgresStore {
    pub async fn new() -> Result<Self, StoreError> {
        let database_url = config::get_database_url();
        let (client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;

        // Spawn connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "database connection error");
            }
        });

        let store = Self {
            client: Arc::new(RwLock::new(Some(client))),
        };

        store.init_schema().await?;

        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::Unavailable)?;

        c.execute(
            "CREATE TABLE IF NOT EXISTS strategies (
                id BIGINT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                symbols_json TEXT NOT NULL,
                risk_level TEXT NOT NULL,
                stop_loss_percentage DOUBLE PRECISION NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )",
            &[],
        )
        .await?;

        c.execute(
            "CREATE TABLE IF NOT EXISTS ai_feedback (
                created_at TIMESTAMPTZ NOT NULL,
                user_id TEXT NOT NULL,
                strategy_id BIGINT NOT NULL,
                action TEXT NOT NULL,
                symbol TEXT NOT NULL,
                confidence DOUBLE PRECISION NOT NULL,
                price_target DOUBLE PRECISION NOT NULL,
                stop_loss DOUBLE PRECISION NOT NULL,
                rationale TEXT NOT NULL,
                technical_indicators TEXT NOT NULL,
                sentiment_analysis TEXT NOT NULL
            )",
            &[],
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SignalStore for PostgresStore {
    /// A row owned by a different user is indistinguishable from a missing
    /// one.
    async fn get_strategy(&self, id: i64, user_id: &str) -> Result<Strategy, StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::Unavailable)?;

        let rows = c
            .query(
                "SELECT id, user_id, name, symbols_json, risk_level, stop_loss_percentage,
                        is_active, created_at, updated_at
                 FROM strategies
                 WHERE id = $1 AND user_id = $2",
                &[&id, &user_id],
            )
            .await?;

        let row = rows.first().ok_or(StoreError::StrategyNotFound(id))?;

        let symbols_json: String = row.get(3);
        let symbols: Vec<String> = serde_json::from_str(&symbols_json)?;
        let risk_level_str: String = row.get(4);
        let risk_level = parse_risk_level(&risk_level_str);

        Ok(Strategy {
            id: Some(row.get(0)),
            user_id: row.get(1),
            name: row.get(2),
            symbols,
            risk_level,
            stop_loss_percentage: row.get(5),
            is_active: row.get(6),
            created_at: row.get::<_, DateTime<Utc>>(7),
            updated_at: row.get::<_, DateTime<Utc>>(8),
        })
    }

    /// Single all-or-nothing insert, no retries.
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<(), StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::Unavailable)?;

        let technical_json = serde_json::to_string(&record.technical_indicators)?;
        let sentiment_json = serde_json::to_string(&record.sentiment_analysis)?;

        c.execute(
            "INSERT INTO ai_feedback (created_at, user_id, strategy_id, action, symbol,
                                      confidence, price_target, stop_loss, rationale,
                                      technical_indicators, sentiment_analysis)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
            &[
                &record.created_at,
                &record.user_id,
                &record.strategy_id,
                &record.action.as_str(),
                &record.symbol,
                &record.confidence,
                &record.price_target,
                &record.stop_loss,
                &record.rationale,
                &technical_json,
                &sentiment_json,
            ],
        )
        .await?;

        Ok(())
    }

    async fn get_feedback(
        &self,
        symbol: Option<&str>,
        limit: i64,
    ) -> Result<Vec<FeedbackRecord>, StoreError> {
        let client = self.client.read().await;
        let c = client.as_ref().ok_or(StoreError::Unavailable)?;

        let rows = if let Some(sym) = symbol {
            c.query(
                "SELECT created_at, user_id, strategy_id, action, symbol, confidence,
                        price_target, stop_loss, rationale, technical_indicators,
                        sentiment_analysis
                 FROM ai_feedback
                 WHERE symbol = $1
                 ORDER BY created_at DESC
                 LIMIT $2",
                &[&sym, &limit],
            )
            .await?
        } else {
            c.query(
                "SELECT created_at, user_id, strategy_id, action, symbol, confidence,
                        price_target, stop_loss, rationale, technical_indicators,
                        sentiment_analysis
                 FROM ai_feedback
                 ORDER BY created_at DESC
                 LIMIT $1",
                &[&limit],
            )
            .await?
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let action_str: String = row.get(3);
            let technical_json: String = row.get(9);
            let sentiment_json: String = row.get(10);
            let sentiment: SentimentResult = serde_json::from_str(&sentiment_json)?;

            records.push(FeedbackRecord {
                created_at: row.get::<_, DateTime<Utc>>(0),
                user_id: row.get(1),
                strategy_id: row.get(2),
                action: parse_action(&action_str),
                symbol: row.get(4),
                confidence: row.get(5),
                price_target: row.get(6),
                stop_loss: row.get(7),
                rationale: row.get(8),
                technical_indicators: serde_json::from_str(&technical_json)?,
                sentiment_analysis: sentiment,
            });
        }

        Ok(records)
    }

    async fn is_available(&self) -> bool {
        let client = self.client.read().await;
        client.is_some()
    }
}

fn parse_risk_level(value: &str) -> RiskLevel {
    match value {
        "low" => RiskLevel::Low,
        "high" => RiskLevel::High,
        _ => RiskLevel::Medium,
    }
}

fn parse_action(value: &str) -> SignalAction {
    match value {
        "BUY" => SignalAction::Buy,
        "SELL" => SignalAction::Sell,
        _ => SignalAction::Hold,
    }
}
