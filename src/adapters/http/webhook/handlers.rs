//! HTTP handler for the conversational-agent webhook.
//!
//! Every outcome, including a malformed body, is answered with HTTP 200 and
//! a `fulfillmentText` message; no dispatch fault reaches the transport
//! layer as an error. The body is read as raw bytes and parsed here so that
//! unparseable input becomes the internal-error reply instead of a 400.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::application::DeviceCommand;
use crate::domain::{DeviceAction, DispatchError};

use super::super::AppState;
use super::dto::{error_reply, success_reply, FulfillmentResponse, WebhookRequest};

/// POST /webhook - Dialogflow fulfillment endpoint
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<FulfillmentResponse> {
    Json(FulfillmentResponse::new(process(&state, &body).await))
}

/// Run the full webhook flow, reducing every path to a reply string.
async fn process(state: &AppState, body: &[u8]) -> String {
    // A malformed body is an internal fault, not an unknown intent.
    let request: WebhookRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(error = %err, "unparseable webhook body");
            return error_reply(&DispatchError::internal(err.to_string()));
        }
    };

    let intent = request.query_result.intent.display_name;

    // Unknown intents are answered without ever contacting the platform.
    let Some(action) = DeviceAction::from_intent(&intent) else {
        tracing::debug!(intent = %intent, "unrecognized intent");
        return error_reply(&DispatchError::UnrecognizedIntent);
    };

    let command = DeviceCommand::new(action, request.query_result.parameters);
    match state.dispatch_handler().handle(command).await {
        Ok(outcome) => success_reply(&outcome),
        Err(err) => error_reply(&err),
    }
}
