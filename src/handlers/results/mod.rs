//! Submission and result handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Submission and result routes, nested under /assessments
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{id}/submit", post(handler::submit_assessment))
        .route("/{id}/result", get(handler::get_my_result))
        .route("/{id}/results", get(handler::list_results))
        .layer(axum_middleware::from_fn_with_state(state, auth_middleware))
}
