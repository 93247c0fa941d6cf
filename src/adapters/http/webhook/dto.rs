//! HTTP DTOs for the conversational-agent webhook.
//!
//! The request shape is owned by the agent platform (Dialogflow fulfillment
//! contract); this module only mirrors the fields the bridge consumes, plus
//! the Spanish reply strings for every outcome.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::DispatchOutcome;
use crate::domain::{DispatchError, ValidationKind};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Inbound webhook body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub query_result: QueryResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub intent: Intent,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub display_name: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Outbound webhook reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub fulfillment_text: String,
}

impl FulfillmentResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }
}

/// User-facing reply for a successful dispatch.
pub fn success_reply(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::PoweredOn => "Foco encendido.".to_string(),
        DispatchOutcome::PoweredOff => "Foco apagado.".to_string(),
        DispatchOutcome::ColorChanged { requested } => format!("Color cambiado a {}.", requested),
        DispatchOutcome::IntensitySet { level } => format!("Intensidad ajustada a {}.", level),
    }
}

/// User-facing reply for a failed dispatch.
pub fn error_reply(error: &DispatchError) -> String {
    match error {
        DispatchError::ConnectionFailure => "No se pudo conectar con el dispositivo.",
        DispatchError::Validation(ValidationKind::MissingColor) => {
            "No entendí el color que deseas."
        }
        DispatchError::Validation(ValidationKind::InvalidIntensity) => {
            "No entendí la intensidad que deseas."
        }
        DispatchError::UnrecognizedIntent => "No entendí el comando.",
        DispatchError::Internal(_) => "Hubo un error interno.",
    }
    .to_string()
}
