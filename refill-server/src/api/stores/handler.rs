//! Store Directory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::Store;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// All stores, ordered by id.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Store>> {
    Json(state.directory.all())
}

/// One store by id.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Store>> {
    let store = state
        .directory
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Unknown store: {id}")))?;

    Ok(Json(store.clone()))
}
