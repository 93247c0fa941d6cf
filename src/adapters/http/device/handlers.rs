//! HTTP handlers for the direct device endpoints.
//!
//! Every path answers HTTP 200 with a status string; dispatch failures are
//! reduced to a message, never to a transport error.

use axum::extract::State;
use axum::Json;

use crate::application::DeviceCommand;
use crate::domain::DispatchError;

use super::super::AppState;
use super::dto::{self, StatusResponse};

/// POST /device/on - send switch_1=true
pub async fn turn_on(State(state): State<AppState>) -> Json<StatusResponse> {
    dispatch_power(state, DeviceCommand::power_on(), dto::TURNED_ON).await
}

/// POST /device/off - send switch_1=false
pub async fn turn_off(State(state): State<AppState>) -> Json<StatusResponse> {
    dispatch_power(state, DeviceCommand::power_off(), dto::TURNED_OFF).await
}

async fn dispatch_power(
    state: AppState,
    command: DeviceCommand,
    success: &'static str,
) -> Json<StatusResponse> {
    let status = match state.dispatch_handler().handle(command).await {
        Ok(_) => success,
        Err(DispatchError::ConnectionFailure) => dto::NOT_CONNECTED,
        Err(err) => {
            tracing::error!(error = %err, "device endpoint dispatch failed");
            dto::INTERNAL_ERROR
        }
    };
    Json(StatusResponse { status })
}
