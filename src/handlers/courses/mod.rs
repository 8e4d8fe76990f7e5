//! Course and enrollment handlers

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

/// Course routes
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_courses))
        .route("/{id}", get(handler::get_course));

    let protected = Router::new()
        .route("/", post(handler::create_course))
        .route("/{id}", put(handler::update_course))
        .route("/{id}", delete(handler::delete_course))
        .route("/{id}/enroll", post(handler::enroll))
        .route("/{id}/enroll", delete(handler::unenroll))
        .route("/{id}/enrollments", get(handler::list_enrollments))
        .layer(axum_middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
