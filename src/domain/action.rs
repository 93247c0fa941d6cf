//! Device actions and the conversational intent table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Webhook parameter carrying the requested color name.
pub const COLOR_PARAM: &str = "color";

/// Webhook parameter carrying the requested brightness.
pub const INTENSITY_PARAM: &str = "intensidad";

/// Actions this bridge knows how to perform on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAction {
    PowerOn,
    PowerOff,
    SetColor,
    SetIntensity,
}

impl DeviceAction {
    /// Resolve a conversational intent display name to an action.
    ///
    /// Returns `None` for names outside the known set; the caller answers
    /// those without ever contacting the platform.
    pub fn from_intent(display_name: &str) -> Option<DeviceAction> {
        INTENT_TABLE.get(display_name).copied()
    }
}

/// Intent display names recognized by the webhook, fixed at process start.
static INTENT_TABLE: Lazy<HashMap<&'static str, DeviceAction>> = Lazy::new(|| {
    HashMap::from([
        ("EncenderFoco", DeviceAction::PowerOn),
        ("ApagarFoco", DeviceAction::PowerOff),
        ("CambiarColorFoco", DeviceAction::SetColor),
        ("IntensidadFoco", DeviceAction::SetIntensity),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_four_intents() {
        assert_eq!(DeviceAction::from_intent("EncenderFoco"), Some(DeviceAction::PowerOn));
        assert_eq!(DeviceAction::from_intent("ApagarFoco"), Some(DeviceAction::PowerOff));
        assert_eq!(DeviceAction::from_intent("CambiarColorFoco"), Some(DeviceAction::SetColor));
        assert_eq!(DeviceAction::from_intent("IntensidadFoco"), Some(DeviceAction::SetIntensity));
    }

    #[test]
    fn intent_names_are_case_sensitive() {
        assert_eq!(DeviceAction::from_intent("encenderfoco"), None);
        assert_eq!(DeviceAction::from_intent("ENCENDERFOCO"), None);
    }

    #[test]
    fn unknown_names_are_not_resolved() {
        assert_eq!(DeviceAction::from_intent("AbrirPuerta"), None);
        assert_eq!(DeviceAction::from_intent(""), None);
    }
}
