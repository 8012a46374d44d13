use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    EstimateRequest, ProfileDocument, PsychologicalAssessment, RiskPreset, RiskProfile,
    ScoredProfile,
};
use crate::services::fund_screener::{self, ScreenerLink};
use crate::services::{risk_classifier, scoring_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profiles/:score", get(get_profile))
        .route("/presets", get(get_presets))
        .route("/assessment", post(score_assessment))
        .route("/estimate", post(estimate_profile))
        .route("/document", post(profile_from_document))
        .route("/funds/:fund_type/screener", get(get_fund_screener))
}

/// GET /api/risk/profiles/:score
///
/// Any integer is accepted; scores outside 0-60 return the "Unknown" profile.
pub async fn get_profile(Path(score): Path<i64>) -> Json<RiskProfile> {
    info!("GET /risk/profiles/{} - Classifying score", score);
    Json(risk_classifier::profile(score))
}

pub async fn get_presets() -> Json<Vec<RiskPreset>> {
    info!("GET /risk/presets - Listing profile presets");
    Json(risk_classifier::presets())
}

/// POST /api/risk/assessment
///
/// Totals the psychological survey answers and classifies the result.
pub async fn score_assessment(
    Json(assessment): Json<PsychologicalAssessment>,
) -> Result<Json<ScoredProfile>, AppError> {
    let score = scoring_service::total_score(&assessment).ok_or_else(|| {
        AppError::Validation("Survey answers are out of range".to_string())
    })?;
    info!("POST /risk/assessment - Survey total {}", score);
    Ok(Json(ScoredProfile {
        score,
        profile: risk_classifier::profile(score),
    }))
}

/// POST /api/risk/estimate
pub async fn estimate_profile(Json(request): Json<EstimateRequest>) -> Json<ScoredProfile> {
    let score = scoring_service::estimate_score(request.risk_tolerance);
    info!(
        "POST /risk/estimate - {:?} tolerance estimated at {}",
        request.risk_tolerance, score
    );
    Json(ScoredProfile {
        score,
        profile: risk_classifier::profile(score),
    })
}

/// POST /api/risk/document
///
/// Classifies the score stored on a user's profile document.
pub async fn profile_from_document(
    Json(document): Json<ProfileDocument>,
) -> Result<Json<ScoredProfile>, AppError> {
    info!("POST /risk/document - Reading stored score");
    let (score, profile) = risk_classifier::profile_for_document(&document).ok_or_else(|| {
        AppError::NotFound("No risk score stored for this profile".to_string())
    })?;
    Ok(Json(ScoredProfile { score, profile }))
}

/// GET /api/risk/funds/:fund_type/screener
pub async fn get_fund_screener(
    Path(fund_type): Path<String>,
) -> Result<Json<ScreenerLink>, AppError> {
    info!("GET /risk/funds/{}/screener - Building screener link", fund_type);
    if fund_type.trim().is_empty() {
        return Err(AppError::Validation("fund type must not be empty".to_string()));
    }

    let link = fund_screener::screener_link(&fund_type).map_err(|e| {
        error!("Failed to build screener link for {}: {}", fund_type, e);
        AppError::Internal(e.to_string())
    })?;
    Ok(Json(link))
}
