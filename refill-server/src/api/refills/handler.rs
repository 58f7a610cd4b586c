//! Refill Queue API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::api::{AckResult, SubmitReceipt};
use shared::models::{RefillRequest, RefillSubmission};

use crate::core::ServerState;
use crate::db::repository::refill_request;
use crate::utils::validation::{validate_first_name, validate_rx_number};
use crate::utils::{AppError, AppResult};

/// Submit a refill request (public form endpoint).
///
/// Validates everything before any row is written; a rejected submission
/// is never queued. Nothing prints synchronously, the store's agent picks
/// the row up on its next poll.
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<RefillSubmission>,
) -> AppResult<Json<SubmitReceipt>> {
    let rx_number = validate_rx_number(&payload.rx_number)?;
    let first_name = validate_first_name(payload.patient_first_name.as_deref())?;

    let store = state
        .directory
        .get(payload.store_id)
        .ok_or_else(|| AppError::validation(format!("Unknown store: {}", payload.store_id)))?;

    let id = refill_request::insert(
        state.pool(),
        &rx_number,
        first_name.as_deref(),
        store.id,
    )
    .await?;

    tracing::info!("Refill request {id} queued for store {}", store.id);

    Ok(Json(SubmitReceipt {
        request_id: id,
        message: format!(
            "Refill request submitted to {} in {}.",
            store.name, store.city
        ),
        store_phone: store.phone.clone(),
    }))
}

/// Pending queue for one store, oldest first (agent poll endpoint).
///
/// Read-only: polling never changes a row's status, so a crash between
/// poll and ack loses nothing. Unknown store is a 404 so a misconfigured
/// agent fails loudly instead of draining an empty queue forever.
pub async fn pending(
    State(state): State<ServerState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<Vec<RefillRequest>>> {
    if !state.directory.contains(store_id) {
        return Err(AppError::not_found(format!("Unknown store: {store_id}")));
    }

    let requests = refill_request::list_pending(state.pool(), store_id).await?;
    Ok(Json(requests))
}

/// Mark a request printed (agent ack endpoint).
///
/// Always succeeds; `changed` is false when the row was already printed
/// or the id is unknown. Agents retrying an ack see no error.
pub async fn ack_printed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AckResult>> {
    let changed = refill_request::mark_printed(state.pool(), id).await?;

    if changed {
        tracing::info!("Refill request {id} marked printed");
    } else {
        tracing::debug!("Ack for request {id} changed nothing");
    }

    Ok(Json(AckResult { changed }))
}
