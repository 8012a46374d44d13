use std::collections::HashSet;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::affinity::{MAX_SELECTION, MIN_SELECTION};
use crate::models::{AffinityRequest, AffinityResponse, Instrument, OrderingPolicy, RiskProfile};
use crate::services::{affinity_matcher, risk_classifier};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/affinity", post(recommend_by_affinity))
        .route("/stocks", get(recommend_stocks))
}

/// POST /api/recommendations/affinity
///
/// Accepts 3 to 20 distinct tickers and returns category recommendations.
pub async fn recommend_by_affinity(
    Json(request): Json<AffinityRequest>,
) -> Result<Json<AffinityResponse>, AppError> {
    let selected: HashSet<String> = request
        .selected
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    info!("POST /recommendations/affinity - {} tickers selected", selected.len());

    if !(MIN_SELECTION..=MAX_SELECTION).contains(&selected.len()) {
        return Err(AppError::Validation(format!(
            "Select between {} and {} investments (got {})",
            MIN_SELECTION,
            MAX_SELECTION,
            selected.len()
        )));
    }

    Ok(Json(AffinityResponse {
        recommendations: affinity_matcher::recommend(&selected),
    }))
}

#[derive(Debug, Deserialize)]
pub struct StockQueryParams {
    /// Questionnaire score; omitted means no band and the default ordering
    pub score: Option<i64>,
    /// Number of instruments to return (default from configuration)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct StockRecommendations {
    pub profile: Option<RiskProfile>,
    pub policy: OrderingPolicy,
    pub generated_at: DateTime<Utc>,
    pub instruments: Vec<Instrument>,
}

/// GET /api/recommendations/stocks?score=30&limit=10
///
/// Ranks listed common stocks by their latest change, ordered for the
/// investor's risk band.
pub async fn recommend_stocks(
    Query(params): Query<StockQueryParams>,
    State(state): State<AppState>,
) -> Result<Json<StockRecommendations>, AppError> {
    let profile = params.score.map(risk_classifier::profile);
    let policy = profile
        .as_ref()
        .map(|p| p.band.ordering_policy())
        .unwrap_or_default();
    let limit = params.limit.unwrap_or(state.config.display_limit);

    info!(
        "GET /recommendations/stocks - score {:?}, policy {:?}, limit {}",
        params.score, policy, limit
    );

    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    // The handler future is dropped if the client goes away, which drops
    // every in-flight quote request with it. Shutdown cancels explicitly.
    let mut instruments = state
        .aggregator
        .recommend(
            &state.config.symbol_exchange,
            policy,
            Some(state.shutdown.clone()),
        )
        .await
        .map_err(|e| {
            error!("Stock recommendations failed: {}", e);
            AppError::from(e)
        })?;

    if instruments.is_empty() {
        warn!("Stock recommendations resolved no priced instruments");
    }
    instruments.truncate(limit);

    Ok(Json(StockRecommendations {
        profile,
        policy,
        generated_at: Utc::now(),
        instruments,
    }))
}
