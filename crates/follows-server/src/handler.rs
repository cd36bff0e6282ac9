use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use follows_dispatch::DispatchResult;
use follows_store::Handle;
use follows_types::{Profile, PublicUser, UserId};
use serde_json::json;

use crate::error::ApiError;
use crate::payload::ActionRequest;
use crate::state::AppState;

/// `GET /users`: every user without following lists.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let handle = state.handle();
    Json(state.dispatcher.public_users(&handle))
}

/// `GET /users/{id}`: one profile with followed users resolved.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let handle = state.handle();
    state
        .dispatcher
        .profile(&handle, &id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `PATCH /users/{id}`: apply one action and publish the resulting handle.
///
/// The target is checked before the body is interpreted, so an unknown
/// user is a 404 whatever the body says.
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let target = UserId::new(id);
    let request = ActionRequest::from_body(&body);
    let dispatcher = &state.dispatcher;
    state.current.update(|handle| -> DispatchResult<Handle> {
        dispatcher.require_target(handle, &target)?;
        let action = request.into_action()?;
        dispatcher.apply_action(handle, &target, &action)
    })?;
    Ok(StatusCode::OK)
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let handle = state.handle();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "users": state.dispatcher.store().len(&handle),
    }))
}
