//! HTTP adapters - REST and webhook endpoint implementations.

pub mod device;
pub mod webhook;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::application::DispatchDeviceCommandHandler;
use crate::ports::DevicePlatform;

pub use device::device_routes;
pub use webhook::webhook_routes;

/// Shared application state for the HTTP surface.
///
/// Cloned per request; holds only the Arc-wrapped platform port and the
/// target device identifier. No mutable state is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub platform: Arc<dyn DevicePlatform>,
    pub device_id: String,
}

impl AppState {
    pub fn new(platform: Arc<dyn DevicePlatform>, device_id: impl Into<String>) -> Self {
        Self {
            platform,
            device_id: device_id.into(),
        }
    }

    /// Create the dispatch handler on demand from the shared state.
    pub fn dispatch_handler(&self) -> DispatchDeviceCommandHandler {
        DispatchDeviceCommandHandler::new(self.platform.clone(), self.device_id.clone())
    }
}

/// Assemble the complete bridge router.
///
/// # Routes
/// - `POST /device/on` / `POST /device/off` - direct REST control
/// - `POST /webhook` - Dialogflow fulfillment requests
/// - `GET /health` - liveness probe
pub fn bridge_router() -> Router<AppState> {
    Router::new()
        .nest("/device", device::device_routes())
        .merge(webhook::webhook_routes())
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
