//! Axum router for the direct device endpoints.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::{turn_off, turn_on};

/// Create the device API router.
///
/// # Routes
/// - `POST /on` - turn the device on
/// - `POST /off` - turn the device off
pub fn device_routes() -> Router<AppState> {
    Router::new()
        .route("/on", post(turn_on))
        .route("/off", post(turn_off))
}
