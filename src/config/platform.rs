//! Vendor platform configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Vendor IoT platform configuration (Tuya OpenAPI)
///
/// All values are constant for the process lifetime. Credentials are kept
/// as plain strings here; the platform adapter wraps the sensitive ones in
/// `secrecy::SecretString` before use.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformConfig {
    /// OpenAPI endpoint URL for the cloud region (e.g. https://openapi.tuyaeu.com)
    pub endpoint: String,

    /// Cloud project access ID
    pub access_id: String,

    /// Cloud project access secret, used to sign every request
    pub access_key: String,

    /// Platform account username for the login exchange
    pub username: String,

    /// Platform account password for the login exchange
    pub password: String,

    /// Identifier of the device all commands are addressed to
    pub device_id: String,
}

impl PlatformConfig {
    /// Validate platform configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.endpoint.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_ENDPOINT"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidEndpointUrl);
        }
        if self.access_id.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_ACCESS_ID"));
        }
        if self.access_key.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_ACCESS_KEY"));
        }
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_USERNAME"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_PASSWORD"));
        }
        if self.device_id.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_DEVICE_ID"));
        }
        Ok(())
    }
}
