use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{CandidateProfile, OpportunityPosting};
use super::engine::MatchingEngine;
use super::recommend::clamp_limit;
use super::validation::ValidationError;

/// Body for single-posting endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRequest {
    pub profile: CandidateProfile,
    pub posting: OpportunityPosting,
}

/// Body for catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub postings: Vec<OpportunityPosting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub postings: Vec<OpportunityPosting>,
    /// Signed so callers may send zero or negative counts; both yield no picks.
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Router exposing the matching engine to the portal front end.
pub fn matching_router(engine: Arc<MatchingEngine>) -> Router {
    Router::new()
        .route("/api/v1/matches/score", post(score_handler))
        .route("/api/v1/matches/eligibility", post(eligibility_handler))
        .route("/api/v1/matches/eligible", post(eligible_handler))
        .route("/api/v1/matches/ranked", post(ranked_handler))
        .route(
            "/api/v1/matches/recommendations",
            post(recommendations_handler),
        )
        .with_state(engine)
}

fn respond<T: Serialize>(result: Result<T, ValidationError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            warn!(%error, "rejected matching request");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<PairRequest>,
) -> Response {
    respond(engine.score(&request.profile, &request.posting))
}

pub(crate) async fn eligibility_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<PairRequest>,
) -> Response {
    respond(engine.eligibility(&request.profile, &request.posting))
}

pub(crate) async fn eligible_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<CatalogRequest>,
) -> Response {
    respond(engine.filter_eligible(&request.profile, &request.postings))
}

pub(crate) async fn ranked_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<CatalogRequest>,
) -> Response {
    respond(engine.rank(&request.profile, &request.postings))
}

pub(crate) async fn recommendations_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let limit = request.limit.map(clamp_limit);
    respond(engine.recommend(&request.profile, &request.postings, limit))
}
