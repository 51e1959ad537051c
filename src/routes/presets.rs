//! Preset REST surface: list/save/delete plus bulk export/import and
//! load-and-send. Export and import exchange the same JSON array the store
//! holds, wholesale and order-preserving.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::relay::outcome_response;
use super::AppState;
use crate::error::AppError;
use crate::store::SavedRequestRecord;

pub async fn list_presets(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedRequestRecord>>, AppError> {
    Ok(Json(state.store.list()?))
}

/// Appends the record, assigning an id when the caller sent none. Saving
/// under an existing name duplicates rather than updating; delete by id
/// first for update-in-place.
pub async fn save_preset(
    State(state): State<AppState>,
    Json(record): Json<SavedRequestRecord>,
) -> Result<(StatusCode, Json<SavedRequestRecord>), AppError> {
    let saved = state.store.put(record)?;
    tracing::debug!(id = %saved.id, name = %saved.name, "Saved preset");
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn delete_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete_by_id(&id)?;
    tracing::debug!(id = %id, "Deleted preset");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_presets(State(state): State<AppState>) -> Result<Response, AppError> {
    let records = state.store.list()?;
    let body = serde_json::to_string_pretty(&records).map_err(crate::store::StoreError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"api_requests.json\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// Replaces the whole collection from an uploaded JSON array. No merge, no
/// validation beyond parseability; a failed parse leaves the collection
/// unchanged.
pub async fn import_presets(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, AppError> {
    let records: Vec<SavedRequestRecord> =
        serde_json::from_str(&body).map_err(|e| AppError::InvalidImport(e.to_string()))?;

    let imported = records.len();
    state.store.replace_all(records)?;
    tracing::info!(imported, "Imported presets");
    Ok(Json(json!({ "imported": imported })))
}

/// Builds the relay descriptor from a stored preset (header rows flattened,
/// auth synthesized) and dispatches it.
pub async fn send_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = state
        .store
        .list()?
        .into_iter()
        .find(|record| record.id == id)
        .ok_or_else(|| AppError::PresetNotFound(id.clone()))?;

    tracing::debug!(id = %id, name = %record.name, "Sending preset");
    let result = state.relay.relay(record.to_descriptor()).await;
    Ok(outcome_response(result))
}
