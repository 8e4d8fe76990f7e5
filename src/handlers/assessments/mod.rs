//! Assessment authoring handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Assessment routes
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/{id}", get(handler::get_assessment));

    let protected = Router::new()
        .route("/", post(handler::create_assessment))
        .route("/{id}", put(handler::update_assessment))
        .route("/{id}", delete(handler::delete_assessment))
        .layer(axum_middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// Assessment routes nested under /courses
pub fn course_routes() -> Router<AppState> {
    Router::new().route(
        "/{course_id}/assessments",
        get(handler::list_course_assessments),
    )
}
