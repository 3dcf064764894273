//! Axum route handlers for the ATS API.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::{
    all_profiles, detect, download_advice, get_profile, profiles_by_market_share, recommend,
    AtsProfile, AtsSummary, DownloadAdvice, Recommendation, ResumeFormat,
};
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub systems: Vec<AtsSummary>,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub detected: Option<&'static AtsProfile>,
    /// Present only when a profile was detected.
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub ats_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadAdviceQuery {
    pub format: ResumeFormat,
    pub ats_id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/ats/systems
///
/// Lists every known ATS. `?sort=market_share` orders by market share, highest first.
pub async fn handle_list_systems(
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let profiles: Vec<&'static AtsProfile> = match params.sort.as_deref() {
        None => all_profiles().iter().collect(),
        Some("market_share") => profiles_by_market_share(),
        Some(other) => {
            return Err(AppError::Validation(format!(
                "Unsupported sort '{other}' (expected 'market_share')"
            )))
        }
    };

    Ok(Json(ListResponse {
        systems: profiles.into_iter().map(AtsSummary::from).collect(),
    }))
}

/// GET /api/v1/ats/systems/:id
pub async fn handle_get_system(
    Path(id): Path<String>,
) -> Result<Json<&'static AtsProfile>, AppError> {
    get_profile(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("ATS system '{id}' not found")))
}

/// POST /api/v1/ats/detect
///
/// Detects the ATS behind a job posting URL and, when found, attaches its recommendation.
pub async fn handle_detect(
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let detected = detect(&request.url);
    let recommendation = detected.map(|profile| recommend(Some(profile.id)));

    Ok(Json(DetectResponse {
        detected,
        recommendation,
    }))
}

/// GET /api/v1/ats/recommendation
///
/// Never fails: an absent or unknown `ats_id` yields the default recommendation.
pub async fn handle_recommendation(
    Query(params): Query<RecommendationQuery>,
) -> Json<Recommendation> {
    debug!(ats_id = ?params.ats_id, "Computing format recommendation");
    Json(recommend(params.ats_id.as_deref()))
}

/// GET /api/v1/ats/download-advice
pub async fn handle_download_advice(
    Query(params): Query<DownloadAdviceQuery>,
) -> Json<DownloadAdvice> {
    Json(download_advice(params.format, params.ats_id.as_deref()))
}
