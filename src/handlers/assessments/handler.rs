//! Assessment handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::AssessmentService,
    state::AppState,
};

use super::{
    request::{CreateAssessmentRequest, UpdateAssessmentRequest},
    response::{AssessmentDetailResponse, AssessmentResponse, AssessmentsListResponse},
};

/// Create an assessment with its questions (course owner or admin)
pub async fn create_assessment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateAssessmentRequest>,
) -> AppResult<(StatusCode, Json<AssessmentResponse>)> {
    payload.validate()?;

    let assessment =
        AssessmentService::create_assessment(state.db(), &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok((StatusCode::CREATED, Json(assessment)))
}

/// Get the public view of an assessment
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AssessmentDetailResponse>> {
    let assessment = AssessmentService::get_assessment(state.db(), &id).await?;
    Ok(Json(assessment))
}

/// Update an assessment (course owner or admin)
pub async fn update_assessment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssessmentRequest>,
) -> AppResult<Json<AssessmentResponse>> {
    payload.validate()?;

    let assessment = AssessmentService::update_assessment(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        payload,
    )
    .await?;

    Ok(Json(assessment))
}

/// Delete an assessment (course owner or admin)
pub async fn delete_assessment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    AssessmentService::delete_assessment(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List assessments belonging to a course
pub async fn list_course_assessments(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> AppResult<Json<AssessmentsListResponse>> {
    let assessments = AssessmentService::list_course_assessments(state.db(), &course_id).await?;

    Ok(Json(AssessmentsListResponse { assessments }))
}
