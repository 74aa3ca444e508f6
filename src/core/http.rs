//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::analysis::AnalysisEngine;
use crate::db::{PostgresStore, SignalStore, StoreError};
use crate::market::{MarketSeriesSource, MockMarketSeries, DEFAULT_DAYS};
use crate::metrics::Metrics;
use crate::models::market::MarketBar;
use crate::models::signal::{FeedbackRecord, Signal};
use crate::services::{HttpIdentityProvider, IdentityError, IdentityProvider};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub database: Option<Arc<dyn SignalStore>>,
    pub identity: Arc<dyn IdentityProvider>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    let database_connected = match &state.database {
        Some(db) => db.is_available().await,
        None => false,
    };
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "database_connected": database_connected,
        "service": "signalcraft-analysis-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text news snippets for the sentiment stage.
    #[serde(default)]
    pub news: Vec<String>,
    /// Bars to score. When absent, a synthetic series is generated.
    pub bars: Option<Vec<MarketBar>>,
    /// Day count for the synthetic series.
    pub days: Option<usize>,
    /// Seed for the synthetic series; unseeded requests draw from entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FeedbackQuery {
    symbol: Option<String>,
    limit: Option<i64>,
}

/// Resolve the bearer credential from the request headers to a user id.
async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<String, StatusCode> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    state.identity.resolve(token).await.map_err(|e| match e {
        IdentityError::Unauthorized => StatusCode::UNAUTHORIZED,
        other => {
            error!(error = %other, "identity provider failure");
            StatusCode::BAD_GATEWAY
        }
    })
}

/// Run the scoring pipeline for a strategy and persist the resulting signal.
async fn analyze_strategy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Signal>, StatusCode> {
    let user_id = authorize(&state, &headers).await?;

    let db = state
        .database
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let strategy = db.get_strategy(id, &user_id).await.map_err(|e| match e {
        StoreError::StrategyNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        other => {
            error!(error = %other, strategy_id = id, "failed to load strategy");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    })?;

    if !strategy.is_active {
        warn!(strategy_id = id, "analysis requested for inactive strategy");
        return Err(StatusCode::CONFLICT);
    }

    let bars = match request.bars {
        Some(bars) => bars,
        None => {
            let days = request.days.unwrap_or(DEFAULT_DAYS);
            let mut source = match request.seed {
                Some(seed) => MockMarketSeries::new(seed),
                None => MockMarketSeries::from_entropy(),
            };
            source.bars(strategy.primary_symbol(), days)
        }
    };

    let signal = AnalysisEngine::analyze(&strategy, &bars, &request.news);
    state.metrics.signals_generated_total.inc();

    info!(
        strategy_id = id,
        symbol = %signal.symbol,
        action = %signal.action,
        confidence = signal.confidence,
        "signal synthesized"
    );

    let record = FeedbackRecord::from_signal(&signal, &user_id, id);
    db.insert_feedback(&record).await.map_err(|e| {
        error!(error = %e, strategy_id = id, "failed to persist feedback");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(signal))
}

/// List recent persisted signals, newest first.
async fn list_feedback(
    State(state): State<AppState>,
    Query(params): Query<FeedbackQuery>,
) -> Result<Json<Value>, StatusCode> {
    let db = state
        .database
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let limit = params.limit.unwrap_or(50).clamp(1, 500);
    let records = db
        .get_feedback(params.symbol.as_deref(), limit)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to load feedback");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(json!(records)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/strategies/{id}/analyze", post(analyze_strategy))
        .route("/api/feedback", get(list_feedback))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    // Database connection is optional: health and metrics stay up without it,
    // analysis and feedback endpoints return 503.
    let database: Option<Arc<dyn SignalStore>> = match PostgresStore::new().await {
        Ok(db) => {
            info!("database connected for API server");
            Some(Arc::new(db))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to connect to database - analysis endpoints will be unavailable");
            None
        }
    };

    let identity: Arc<dyn IdentityProvider> = Arc::new(HttpIdentityProvider::new(
        crate::config::get_identity_base_url(),
    ));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: metrics.clone(),
        start_time: start_time.clone(),
        database,
        identity,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
