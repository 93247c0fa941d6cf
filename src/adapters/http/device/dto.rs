//! HTTP DTOs for the direct device endpoints.

use serde::Serialize;

/// Response body for `/device/on` and `/device/off`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub const TURNED_ON: &str = "Device turned ON";
pub const TURNED_OFF: &str = "Device turned OFF";
pub const NOT_CONNECTED: &str = "Device not connected";
pub const INTERNAL_ERROR: &str = "Internal error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_shape() {
        let json = serde_json::to_value(StatusResponse { status: TURNED_ON }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Device turned ON"}));
    }
}
