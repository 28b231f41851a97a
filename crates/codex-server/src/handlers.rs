//! Route handlers.
//!
//! Each handler is a thin shim: pick the entity, run the blocking loader call
//! on the blocking pool, and let [`ApiError`] shape any failure.

use axum::extract::{Path, State};
use axum::response::Json;
use codex_core::{list_all_characters, EntityKind, RecordLoader};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run a loader call off the async workers.
async fn blocking<T, E, F>(state: &AppState, f: F) -> Result<Result<T, E>, ApiError>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&RecordLoader) -> Result<T, E> + Send + 'static,
{
    let loader = state.loader.clone();
    tokio::task::spawn_blocking(move || f(&*loader))
        .await
        .map_err(|e| ApiError::Internal(format!("loader task failed: {e}")))
}

async fn load(state: &AppState, kind: EntityKind, id: Option<String>) -> ApiResult<Value> {
    blocking(state, move |loader| loader.load(kind, id.as_deref()))
        .await?
        .map(Json)
        .map_err(|e| ApiError::load(kind, e))
}

/// GET /character_ids
pub async fn character_ids(State(state): State<AppState>) -> ApiResult<Value> {
    load(&state, EntityKind::CharacterIndex, None).await
}

/// GET /characters/{id}
pub async fn character(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    load(&state, EntityKind::Character, Some(id)).await
}

/// GET /weapon_ids
pub async fn weapon_ids(State(state): State<AppState>) -> ApiResult<Value> {
    load(&state, EntityKind::WeaponIndex, None).await
}

/// GET /weapons/{id}
pub async fn weapon(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    load(&state, EntityKind::Weapon, Some(id)).await
}

/// GET /characters
pub async fn all_characters(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    blocking(&state, list_all_characters)
        .await?
        .map(Json)
        .map_err(|e| ApiError::load(e.kind, e.source))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "codex",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}
