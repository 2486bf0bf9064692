use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::analyzer::{AnalysisResult, ClaimAnalyzer};
use super::domain::{Claim, ConditionDefinition, ConditionId};
use super::rating::DisabilityRating;
use super::report::{AnalysisReport, ReportFormat};
use crate::caselaw::{CaseLawIndex, CaseLawQuery, CaseMatch};
use crate::error::AppError;

/// Shared, read-only state behind the claims endpoints.
#[derive(Debug, Clone)]
pub struct ClaimsState {
    pub analyzer: Arc<ClaimAnalyzer>,
    pub case_law: Arc<CaseLawIndex>,
}

impl ClaimsState {
    pub fn new(analyzer: Arc<ClaimAnalyzer>, case_law: Arc<CaseLawIndex>) -> Self {
        Self { analyzer, case_law }
    }
}

/// Router builder exposing claim analysis, rating and reference-data endpoints.
pub fn claims_router(state: ClaimsState) -> Router {
    Router::new()
        .route("/api/v1/claims/analyze", post(analyze_handler))
        .route("/api/v1/claims/report", post(report_handler))
        .route("/api/v1/ratings/combined", post(combined_rating_handler))
        .route("/api/v1/conditions", get(conditions_handler))
        .route("/api/v1/conditions/:condition_id", get(condition_handler))
        .route("/api/v1/caselaw", get(case_law_handler))
        .with_state(state)
}

pub(crate) async fn analyze_handler(
    State(state): State<ClaimsState>,
    Json(claim): Json<Claim>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = state.analyzer.analyze(&claim)?;
    info!(
        conditions = claim.conditions.len(),
        overall_success_probability = result.overall_success_probability,
        "claim analysis served"
    );
    Ok(Json(result))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportParams {
    #[serde(default)]
    format: Option<String>,
}

pub(crate) async fn report_handler(
    State(state): State<ClaimsState>,
    Query(params): Query<ReportParams>,
    Json(claim): Json<Claim>,
) -> Result<Response, AppError> {
    let format = match params.format.as_deref() {
        None => ReportFormat::default(),
        Some(raw) => match raw.parse::<ReportFormat>() {
            Ok(format) => format,
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return Ok((StatusCode::BAD_REQUEST, Json(payload)).into_response());
            }
        },
    };

    let result = state.analyzer.analyze(&claim)?;
    let body = AnalysisReport::new(&claim, &result, Utc::now().date_naive()).render(format)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub(crate) struct CombinedRatingRequest {
    ratings: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CombinedRatingResponse {
    combined: DisabilityRating,
    individual: Vec<u8>,
}

pub(crate) async fn combined_rating_handler(
    State(state): State<ClaimsState>,
    Json(request): Json<CombinedRatingRequest>,
) -> Result<Json<CombinedRatingResponse>, AppError> {
    let combined = state
        .analyzer
        .ratings()
        .combine_percentages(&request.ratings)?;
    Ok(Json(CombinedRatingResponse {
        combined,
        individual: request.ratings,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConditionSearch {
    #[serde(default)]
    q: Option<String>,
}

pub(crate) async fn conditions_handler(
    State(state): State<ClaimsState>,
    Query(search): Query<ConditionSearch>,
) -> Json<Vec<ConditionDefinition>> {
    let catalog = state.analyzer.catalog();
    let found = catalog
        .search(search.q.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    Json(found)
}

pub(crate) async fn condition_handler(
    State(state): State<ClaimsState>,
    Path(condition_id): Path<String>,
) -> Response {
    let id = ConditionId::new(condition_id);
    match state.analyzer.catalog().condition(&id) {
        Some(definition) => (StatusCode::OK, Json(definition.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown condition '{id}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn case_law_handler(
    State(state): State<ClaimsState>,
    Query(query): Query<CaseLawQuery>,
) -> Response {
    let matches: Vec<CaseMatch<'_>> = state.case_law.search(&query);
    (StatusCode::OK, Json(matches)).into_response()
}
