//! Submission and result handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ScoringService,
    state::AppState,
};

use super::{
    request::SubmitAssessmentRequest,
    response::{AssessmentResultsResponse, ResultResponse, SubmissionResponse},
};

/// Submit answers for an assessment and receive the scored outcome
pub async fn submit_assessment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitAssessmentRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    let outcome =
        ScoringService::submit(state.db(), &id, &auth_user.id, &payload.answers).await?;

    Ok(Json(outcome))
}

/// Get the caller's result for an assessment
pub async fn get_my_result(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResultResponse>> {
    let result = ScoringService::get_my_result(state.db(), &id, &auth_user.id).await?;

    Ok(Json(result))
}

/// List all results for an assessment (course owner or admin)
pub async fn list_results(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AssessmentResultsResponse>> {
    let results =
        ScoringService::list_results(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(Json(results))
}
