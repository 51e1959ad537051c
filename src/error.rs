use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level failures surfaced by the HTTP layer. Relay failures
/// have their own closed taxonomy (`RelayError`) and never pass through
/// here; this covers the preset store and routing.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid import payload: {0}")]
    InvalidImport(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PresetNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidImport(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
