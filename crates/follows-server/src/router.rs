use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all Follows endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/users", get(handler::list_users))
        .route(
            "/users/:id",
            get(handler::get_user).patch(handler::patch_user),
        )
        .with_state(state)
}

/// [`build_router`] with per-request tracing spans.
pub fn build_traced_router(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}
