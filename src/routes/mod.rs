pub mod health;
pub mod presets;
pub mod relay;
pub mod static_files;

use crate::relay::RelayService;
use crate::store::PresetStore;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Shared handler state. Both seams are trait objects so tests can inject
/// mock implementations.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn RelayService>,
    pub store: Arc<dyn PresetStore>,
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/relay", post(relay::relay_request))
        .route(
            "/api/presets",
            get(presets::list_presets).post(presets::save_preset),
        )
        .route("/api/presets/export", get(presets::export_presets))
        .route("/api/presets/import", post(presets::import_presets))
        .route("/api/presets/:id", delete(presets::delete_preset))
        .route("/api/presets/:id/send", post(presets::send_preset))
        .fallback(static_files::serve_static)
        .with_state(state)
}
