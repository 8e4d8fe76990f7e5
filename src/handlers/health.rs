//! Health check handler

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    db,
    error::{AppError, AppResult},
    state::AppState,
};

/// Health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Report service liveness and database reachability
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    db::test_connection(state.db())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
