//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::User,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, RegisterResponse, UserResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
        payload.display_name.as_deref(),
    )
    .await?;

    state.mailer().send_async(
        user.email.clone(),
        "Welcome to LearnHub".to_string(),
        format!(
            "Hi {}, your account has been created. Browse the course catalog to get started.",
            user.username
        ),
    );

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user: to_user_response(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username/email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.identifier,
        &payload.password,
    )
    .await?;

    let response = AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: to_user_response(user),
    };

    Ok(Json(response))
}

/// Get the current user's profile
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;

    Ok(Json(CurrentUserResponse {
        user: to_user_response(user),
    }))
}

fn to_user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        display_name: user.display_name,
        role: user.role,
        created_at: user.created_at,
    }
}
