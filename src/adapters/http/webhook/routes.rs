//! Axum router for the conversational-agent webhook.

use axum::{routing::post, Router};

use super::super::AppState;
use super::handlers::handle_webhook;

/// Create the webhook router.
///
/// Exposed at the root because the exact `/webhook` path is part of the
/// agent platform's fulfillment configuration.
///
/// # Routes
/// - `POST /webhook` - Dialogflow fulfillment requests
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(handle_webhook))
}
