//! Domain types: the color table, intensity clamping, command payloads,
//! recognized device actions, and the dispatch error taxonomy.

mod action;
mod color;
mod command;
mod errors;
mod intensity;

pub use action::{DeviceAction, COLOR_PARAM, INTENSITY_PARAM};
pub use color::HsvColor;
pub use command::{Command, CommandCode, CommandPayload, CommandValue};
pub use errors::{DispatchError, ValidationKind};
pub use intensity::Intensity;
