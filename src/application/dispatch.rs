//! DispatchDeviceCommandHandler - turns one device action into one platform command.
//!
//! Per-request flow, terminal in one pass:
//! Received → SessionResolved | SessionFailed → CommandSent | ValidationFailed
//! → Responded. No retries, no resumption, no state kept between requests.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::{
    CommandPayload, DeviceAction, DispatchError, HsvColor, Intensity, COLOR_PARAM, INTENSITY_PARAM,
};
use crate::ports::DevicePlatform;

/// Command to dispatch one device action with its raw webhook parameters.
#[derive(Debug, Clone)]
pub struct DeviceCommand {
    pub action: DeviceAction,
    pub parameters: Map<String, Value>,
}

impl DeviceCommand {
    pub fn new(action: DeviceAction, parameters: Map<String, Value>) -> Self {
        Self { action, parameters }
    }

    /// Parameterless power-on command, as issued by the REST surface.
    pub fn power_on() -> Self {
        Self::new(DeviceAction::PowerOn, Map::new())
    }

    /// Parameterless power-off command, as issued by the REST surface.
    pub fn power_off() -> Self {
        Self::new(DeviceAction::PowerOff, Map::new())
    }
}

/// Result of a successful dispatch, naming the action taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    PoweredOn,
    PoweredOff,
    /// Color command sent; keeps the caller's spelling for the reply.
    ColorChanged { requested: String },
    /// Brightness command sent with the clamped level.
    IntensitySet { level: i64 },
}

/// Handler dispatching device commands through the platform port.
pub struct DispatchDeviceCommandHandler {
    platform: Arc<dyn DevicePlatform>,
    device_id: String,
}

impl DispatchDeviceCommandHandler {
    pub fn new(platform: Arc<dyn DevicePlatform>, device_id: impl Into<String>) -> Self {
        Self {
            platform,
            device_id: device_id.into(),
        }
    }

    /// Dispatch one command: acquire a session, validate parameters, build
    /// exactly one payload, send it once.
    ///
    /// A failed session acquisition is [`DispatchError::ConnectionFailure`]
    /// and no command is attempted. A validation failure sends nothing.
    /// A failed delivery after a successful login is
    /// [`DispatchError::Internal`].
    pub async fn handle(&self, cmd: DeviceCommand) -> Result<DispatchOutcome, DispatchError> {
        let session = self.platform.acquire_session().await.map_err(|err| {
            tracing::warn!(error = %err, "platform session acquisition failed");
            DispatchError::ConnectionFailure
        })?;

        let (payload, outcome) = build_payload(&cmd)?;

        session
            .send_command(&self.device_id, &payload)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, device_id = %self.device_id, "command delivery failed");
                DispatchError::internal(err.to_string())
            })?;

        tracing::info!(device_id = %self.device_id, action = ?cmd.action, "command sent");
        Ok(outcome)
    }
}

/// Validate parameters and construct exactly one command payload.
fn build_payload(cmd: &DeviceCommand) -> Result<(CommandPayload, DispatchOutcome), DispatchError> {
    match cmd.action {
        DeviceAction::PowerOn => Ok((CommandPayload::power(true), DispatchOutcome::PoweredOn)),
        DeviceAction::PowerOff => Ok((CommandPayload::power(false), DispatchOutcome::PoweredOff)),
        DeviceAction::SetColor => {
            let requested = cmd
                .parameters
                .get(COLOR_PARAM)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(DispatchError::missing_color)?;

            // Unknown names fall back to the default entry, never an error.
            let color = HsvColor::resolve(requested);
            Ok((
                CommandPayload::color(color),
                DispatchOutcome::ColorChanged {
                    requested: requested.to_string(),
                },
            ))
        }
        DeviceAction::SetIntensity => {
            let level = cmd
                .parameters
                .get(INTENSITY_PARAM)
                .and_then(Intensity::from_parameter)
                .ok_or_else(DispatchError::invalid_intensity)?;

            Ok((
                CommandPayload::brightness(level),
                DispatchOutcome::IntensitySet {
                    level: level.value(),
                },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DeviceSession, PlatformError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    /// Platform that records acquisitions and every command sent.
    struct RecordingPlatform {
        fail_login: bool,
        acquisitions: Mutex<usize>,
        commands: Arc<Mutex<Vec<(String, CommandPayload)>>>,
    }

    impl RecordingPlatform {
        fn healthy() -> Self {
            Self {
                fail_login: false,
                acquisitions: Mutex::new(0),
                commands: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                fail_login: true,
                ..Self::healthy()
            }
        }

        fn sent(&self) -> Vec<(String, CommandPayload)> {
            self.commands.lock().unwrap().clone()
        }

        fn acquisition_count(&self) -> usize {
            *self.acquisitions.lock().unwrap()
        }
    }

    #[async_trait]
    impl DevicePlatform for RecordingPlatform {
        async fn acquire_session(&self) -> Result<Box<dyn DeviceSession>, PlatformError> {
            *self.acquisitions.lock().unwrap() += 1;
            if self.fail_login {
                return Err(PlatformError::AuthenticationFailed("mock failure".into()));
            }
            Ok(Box::new(RecordingSession {
                commands: self.commands.clone(),
            }))
        }
    }

    struct RecordingSession {
        commands: Arc<Mutex<Vec<(String, CommandPayload)>>>,
    }

    #[async_trait]
    impl DeviceSession for RecordingSession {
        async fn send_command(
            &self,
            device_id: &str,
            payload: &CommandPayload,
        ) -> Result<(), PlatformError> {
            self.commands
                .lock()
                .unwrap()
                .push((device_id.to_string(), payload.clone()));
            Ok(())
        }
    }

    /// Session that accepts the login but refuses delivery.
    struct BrokenDeliveryPlatform;

    #[async_trait]
    impl DevicePlatform for BrokenDeliveryPlatform {
        async fn acquire_session(&self) -> Result<Box<dyn DeviceSession>, PlatformError> {
            Ok(Box::new(BrokenDeliverySession))
        }
    }

    struct BrokenDeliverySession;

    #[async_trait]
    impl DeviceSession for BrokenDeliverySession {
        async fn send_command(
            &self,
            _device_id: &str,
            _payload: &CommandPayload,
        ) -> Result<(), PlatformError> {
            Err(PlatformError::Rejected {
                code: 1010,
                message: "token invalid".into(),
            })
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler(platform: Arc<dyn DevicePlatform>) -> DispatchDeviceCommandHandler {
        DispatchDeviceCommandHandler::new(platform, "bf-test-device")
    }

    fn params(pairs: serde_json::Value) -> Map<String, Value> {
        pairs.as_object().unwrap().clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Dispatch Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn power_on_sends_one_switch_command() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let result = handler(platform.clone()).handle(DeviceCommand::power_on()).await;

        assert_eq!(result, Ok(DispatchOutcome::PoweredOn));
        let sent = platform.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "bf-test-device");
        assert_eq!(sent[0].1, CommandPayload::power(true));
    }

    #[tokio::test]
    async fn power_off_sends_switch_false() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let result = handler(platform.clone()).handle(DeviceCommand::power_off()).await;

        assert_eq!(result, Ok(DispatchOutcome::PoweredOff));
        assert_eq!(platform.sent()[0].1, CommandPayload::power(false));
    }

    #[tokio::test]
    async fn set_color_resolves_the_table_entry() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let cmd = DeviceCommand::new(DeviceAction::SetColor, params(json!({"color": "Rojo"})));
        let result = handler(platform.clone()).handle(cmd).await;

        assert_eq!(
            result,
            Ok(DispatchOutcome::ColorChanged {
                requested: "Rojo".to_string()
            })
        );
        assert_eq!(
            platform.sent()[0].1,
            CommandPayload::color(HsvColor { h: 0, s: 1000, v: 1000 })
        );
    }

    #[tokio::test]
    async fn unknown_color_sends_the_default_entry() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let cmd = DeviceCommand::new(DeviceAction::SetColor, params(json!({"color": "turquesa"})));
        let result = handler(platform.clone()).handle(cmd).await;

        assert!(result.is_ok());
        assert_eq!(platform.sent()[0].1, CommandPayload::color(HsvColor::DEFAULT));
    }

    #[tokio::test]
    async fn missing_color_is_a_validation_failure_and_sends_nothing() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let cmd = DeviceCommand::new(DeviceAction::SetColor, Map::new());
        let result = handler(platform.clone()).handle(cmd).await;

        assert_eq!(result, Err(DispatchError::missing_color()));
        assert!(platform.sent().is_empty());
    }

    #[tokio::test]
    async fn intensity_is_clamped_before_sending() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let cmd = DeviceCommand::new(
            DeviceAction::SetIntensity,
            params(json!({"intensidad": "5000"})),
        );
        let result = handler(platform.clone()).handle(cmd).await;

        assert_eq!(result, Ok(DispatchOutcome::IntensitySet { level: 1000 }));
        assert_eq!(
            platform.sent()[0].1,
            CommandPayload::brightness(Intensity::clamp(1000))
        );
    }

    #[tokio::test]
    async fn unparseable_intensity_is_rejected_and_sends_nothing() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let cmd = DeviceCommand::new(
            DeviceAction::SetIntensity,
            params(json!({"intensidad": "abc"})),
        );
        let result = handler(platform.clone()).handle(cmd).await;

        assert_eq!(result, Err(DispatchError::invalid_intensity()));
        assert!(platform.sent().is_empty());
    }

    #[tokio::test]
    async fn session_failure_is_connection_failure_for_every_action() {
        let platform = Arc::new(RecordingPlatform::failing());

        for cmd in [
            DeviceCommand::power_on(),
            DeviceCommand::power_off(),
            DeviceCommand::new(DeviceAction::SetColor, params(json!({"color": "azul"}))),
            DeviceCommand::new(DeviceAction::SetIntensity, params(json!({"intensidad": 500}))),
        ] {
            let result = handler(platform.clone()).handle(cmd).await;
            assert_eq!(result, Err(DispatchError::ConnectionFailure));
        }
        assert!(platform.sent().is_empty());
        assert_eq!(platform.acquisition_count(), 4);
    }

    #[tokio::test]
    async fn failed_delivery_is_internal_not_connection_failure() {
        let result = handler(Arc::new(BrokenDeliveryPlatform))
            .handle(DeviceCommand::power_on())
            .await;

        assert!(matches!(result, Err(DispatchError::Internal(_))));
    }

    #[tokio::test]
    async fn each_request_acquires_its_own_session() {
        let platform = Arc::new(RecordingPlatform::healthy());
        let handler = handler(platform.clone());

        handler.handle(DeviceCommand::power_on()).await.unwrap();
        handler.handle(DeviceCommand::power_off()).await.unwrap();

        assert_eq!(platform.acquisition_count(), 2);
        assert_eq!(platform.sent().len(), 2);
    }
}
