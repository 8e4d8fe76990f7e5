//! User handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UpdateUserRequest},
    response::{UserProfileResponse, UsersListResponse},
};

/// List all users (paginated)
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    let users = users
        .into_iter()
        .map(|u| UserProfileResponse {
            id: u.id,
            username: u.username,
            display_name: u.display_name,
            role: u.role,
            created_at: u.created_at,
        })
        .collect();

    Ok(Json(UsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = UserService::get_user_by_id(state.db(), &id).await?;

    Ok(Json(UserProfileResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role,
        created_at: user.created_at,
    }))
}

/// Update user profile
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserProfileResponse>> {
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        &id,
        payload.display_name.as_deref(),
        payload.email.as_deref(),
        payload.current_password.as_deref(),
        payload.new_password.as_deref(),
    )
    .await?;

    Ok(Json(UserProfileResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role,
        created_at: user.created_at,
    }))
}
