//! Wire shapes for device commands.
//!
//! A payload is constructed fresh per request, carries exactly one command,
//! is sent once, and is then discarded.

use serde::Serialize;

use super::color::HsvColor;
use super::intensity::Intensity;

/// Vendor-defined identifier naming the device capability being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandCode {
    #[serde(rename = "switch_1")]
    Switch,
    #[serde(rename = "colour_data_v2")]
    ColourData,
    #[serde(rename = "bright_value_v2")]
    BrightValue,
}

/// Value transmitted with a command; its JSON shape depends on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandValue {
    Switch(bool),
    Color(HsvColor),
    Brightness(Intensity),
}

/// A single code/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    pub code: CommandCode,
    pub value: CommandValue,
}

/// Payload POSTed to the vendor's device command endpoint.
///
/// Serializes as `{"commands": [{"code": ..., "value": ...}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPayload {
    pub commands: Vec<Command>,
}

impl CommandPayload {
    fn single(code: CommandCode, value: CommandValue) -> Self {
        Self {
            commands: vec![Command { code, value }],
        }
    }

    /// Power switch command.
    pub fn power(on: bool) -> Self {
        Self::single(CommandCode::Switch, CommandValue::Switch(on))
    }

    /// Color command with an HSV triple.
    pub fn color(color: HsvColor) -> Self {
        Self::single(CommandCode::ColourData, CommandValue::Color(color))
    }

    /// Brightness command with an already-clamped level.
    pub fn brightness(level: Intensity) -> Self {
        Self::single(CommandCode::BrightValue, CommandValue::Brightness(level))
    }
}
