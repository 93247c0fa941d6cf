//! Tuya platform adapter.
//!
//! Implements the `DevicePlatform` port against the Tuya OpenAPI: a signed
//! login exchange per acquisition, then a single signed command POST per
//! session. No token is cached or reused; each acquired session lives for
//! exactly one request, and nothing is retried.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::PlatformConfig;
use crate::domain::CommandPayload;
use crate::ports::{DevicePlatform, DeviceSession, PlatformError};

use super::sign;

const LOGIN_PATH: &str = "/v1.0/iot-01/associated-users/actions/authorized-login";

/// Tuya OpenAPI adapter.
pub struct TuyaPlatformAdapter {
    endpoint: String,
    access_id: String,
    access_key: SecretString,
    username: String,
    password: SecretString,
    http_client: reqwest::Client,
}

impl TuyaPlatformAdapter {
    /// Create a new adapter from the platform configuration.
    pub fn new(config: &PlatformConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            access_id: config.access_id.clone(),
            access_key: SecretString::new(config.access_key.clone()),
            username: config.username.clone(),
            password: SecretString::new(config.password.clone()),
            http_client: reqwest::Client::new(),
        }
    }
}

/// Headers for a signed request. `access_token` is present on
/// session-scoped calls only.
fn signed_headers(
    access_id: &str,
    access_key: &SecretString,
    method: &str,
    path: &str,
    body: &[u8],
    access_token: Option<&str>,
) -> Result<HeaderMap, PlatformError> {
    let t = Utc::now().timestamp_millis().to_string();
    signed_headers_at(access_id, access_key, method, path, body, access_token, &t)
}

fn signed_headers_at(
    access_id: &str,
    access_key: &SecretString,
    method: &str,
    path: &str,
    body: &[u8],
    access_token: Option<&str>,
    t: &str,
) -> Result<HeaderMap, PlatformError> {
    let canonical = sign::string_to_sign(method, body, path);
    let message = match access_token {
        Some(token) => format!("{}{}{}{}", access_id, token, t, canonical),
        None => format!("{}{}{}", access_id, t, canonical),
    };
    let signature = sign::sign(access_key.expose_secret(), &message);

    let mut headers = HeaderMap::new();
    headers.insert("client_id", header_value(access_id)?);
    headers.insert("sign", header_value(&signature)?);
    headers.insert("sign_method", HeaderValue::from_static("HMAC-SHA256"));
    headers.insert("t", header_value(t)?);
    if let Some(token) = access_token {
        headers.insert("access_token", header_value(token)?);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, PlatformError> {
    HeaderValue::from_str(value)
        .map_err(|err| PlatformError::Request(format!("invalid header value: {}", err)))
}

/// Envelope every Tuya response arrives in.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    result: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResult {
    access_token: String,
}

#[async_trait]
impl DevicePlatform for TuyaPlatformAdapter {
    async fn acquire_session(&self) -> Result<Box<dyn DeviceSession>, PlatformError> {
        let body = serde_json::to_vec(&json!({
            "username": self.username,
            "password": self.password.expose_secret(),
        }))
        .map_err(|err| PlatformError::Request(err.to_string()))?;

        let headers = signed_headers(
            &self.access_id,
            &self.access_key,
            "POST",
            LOGIN_PATH,
            &body,
            None,
        )?;

        let response = self
            .http_client
            .post(format!("{}{}", self.endpoint, LOGIN_PATH))
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| PlatformError::Request(err.to_string()))?;

        let envelope: ApiEnvelope<LoginResult> = response
            .json()
            .await
            .map_err(|err| PlatformError::InvalidResponse(err.to_string()))?;

        if !envelope.success {
            tracing::warn!(code = ?envelope.code, msg = ?envelope.msg, "platform login rejected");
            return Err(PlatformError::AuthenticationFailed(
                envelope.msg.unwrap_or_else(|| "login rejected".to_string()),
            ));
        }

        let result = envelope.result.ok_or_else(|| {
            PlatformError::InvalidResponse("login response missing result".to_string())
        })?;

        Ok(Box::new(TuyaSession {
            endpoint: self.endpoint.clone(),
            access_id: self.access_id.clone(),
            access_key: self.access_key.clone(),
            access_token: result.access_token,
            http_client: self.http_client.clone(),
        }))
    }
}

/// A logged-in session, valid for one request.
struct TuyaSession {
    endpoint: String,
    access_id: String,
    access_key: SecretString,
    access_token: String,
    http_client: reqwest::Client,
}

#[async_trait]
impl DeviceSession for TuyaSession {
    async fn send_command(
        &self,
        device_id: &str,
        payload: &CommandPayload,
    ) -> Result<(), PlatformError> {
        let path = format!("/v1.0/iot-03/devices/{}/commands", device_id);
        let body = serde_json::to_vec(payload)
            .map_err(|err| PlatformError::Request(err.to_string()))?;

        let headers = signed_headers(
            &self.access_id,
            &self.access_key,
            "POST",
            &path,
            &body,
            Some(&self.access_token),
        )?;

        let response = self
            .http_client
            .post(format!("{}{}", self.endpoint, path))
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|err| PlatformError::Request(err.to_string()))?;

        let envelope: ApiEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|err| PlatformError::InvalidResponse(err.to_string()))?;

        if !envelope.success {
            return Err(PlatformError::Rejected {
                code: envelope.code.unwrap_or_default(),
                message: envelope.msg.unwrap_or_else(|| "command rejected".to_string()),
            });
        }

        Ok(())
    }
}
