//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_users))
        .route("/{id}", get(handler::get_user));

    let protected = Router::new()
        .route("/{id}", put(handler::update_user))
        .layer(axum_middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
