//! Device platform port for the vendor IoT cloud.
//!
//! Defines the contract the dispatcher consumes: one authentication
//! exchange per acquisition, one delivery attempt per command. The platform
//! guarantees neither idempotence nor retries, and this port does not add
//! any.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CommandPayload;

/// Errors from the vendor platform boundary.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The login exchange did not produce a session.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The HTTP exchange itself failed (network, timeout, bad request).
    #[error("platform request failed: {0}")]
    Request(String),

    /// The platform answered with a failure envelope.
    #[error("platform rejected the call (code {code}): {message}")]
    Rejected { code: i64, message: String },

    /// The platform answered with something that could not be parsed.
    #[error("invalid platform response: {0}")]
    InvalidResponse(String),
}

/// Port for the vendor IoT platform.
///
/// Sessions are never cached or reused across requests; each inbound
/// request performs its own login exchange.
#[async_trait]
pub trait DevicePlatform: Send + Sync {
    /// Perform the login exchange and return a session for one request.
    ///
    /// Any error from the exchange is reported immediately; there is no
    /// retry.
    async fn acquire_session(&self) -> Result<Box<dyn DeviceSession>, PlatformError>;
}

/// An authenticated capability, valid for the lifetime of one request.
#[async_trait]
pub trait DeviceSession: Send + Sync {
    /// Deliver one command payload to the addressed device.
    ///
    /// Fire-and-forget: a failed send is reported but never retried or
    /// rolled back.
    async fn send_command(
        &self,
        device_id: &str,
        payload: &CommandPayload,
    ) -> Result<(), PlatformError>;
}
