//! Course handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{CourseService, UserService},
    state::AppState,
};

use super::{
    request::{CreateCourseRequest, ListCoursesQuery, ListEnrollmentsQuery, UpdateCourseRequest},
    response::{CourseResponse, CoursesListResponse, EnrollResponse, EnrollmentsListResponse},
};

/// List courses (paginated)
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<CoursesListResponse>> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (courses, total) = CourseService::list_courses(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.instructor_id.as_ref(),
    )
    .await?;

    Ok(Json(CoursesListResponse {
        courses,
        total,
        page,
        per_page,
    }))
}

/// Get a specific course by ID
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CourseResponse>> {
    let course = CourseService::get_course(state.db(), &id).await?;
    Ok(Json(course))
}

/// Create a new course (instructor or admin)
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    payload.validate()?;

    let course =
        CourseService::create_course(state.db(), &auth_user.id, &auth_user.role, payload).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Update a course (owner or admin)
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    payload.validate()?;

    let course =
        CourseService::update_course(state.db(), &id, &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok(Json(course))
}

/// Delete a course (owner or admin)
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CourseService::delete_course(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Enroll the caller in a course
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<EnrollResponse>)> {
    let enrollment = CourseService::enroll(state.db(), &id, &auth_user.id).await?;

    // Confirmation mail is fire-and-forget
    if let Ok(user) = UserService::get_user_by_id(state.db(), &auth_user.id).await {
        state.mailer().send_async(
            user.email,
            format!("Enrolled in {}", enrollment.course_title),
            format!(
                "Hi {}, you are now enrolled in the course '{}'.",
                user.username, enrollment.course_title
            ),
        );
    }

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Remove the caller's enrollment from a course
pub async fn unenroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CourseService::unenroll(state.db(), &id, &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List enrollments for a course (owner or admin)
pub async fn list_enrollments(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<ListEnrollmentsQuery>,
) -> AppResult<Json<EnrollmentsListResponse>> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (enrollments, total) = CourseService::list_enrollments(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        page,
        per_page,
    )
    .await?;

    Ok(Json(EnrollmentsListResponse {
        enrollments,
        total,
        page,
        per_page,
    }))
}
