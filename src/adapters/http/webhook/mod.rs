//! Conversational-agent webhook endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{FulfillmentResponse, WebhookRequest};
pub use routes::webhook_routes;
