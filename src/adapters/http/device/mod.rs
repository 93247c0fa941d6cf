//! Direct REST endpoints for device power control.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::StatusResponse;
pub use routes::device_routes;
