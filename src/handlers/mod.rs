//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assessments;
pub mod auth;
pub mod courses;
pub mod health;
pub mod results;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest("/users", users::routes(state.clone()))
        .nest("/courses", courses::routes(state.clone()))
        .merge(Router::new().nest("/courses", assessments::course_routes()))
        .nest("/assessments", assessments::routes(state.clone()))
        .merge(Router::new().nest("/assessments", results::routes(state)))
}
