//! Application layer - command dispatch orchestration.

mod dispatch;

pub use dispatch::{DeviceCommand, DispatchDeviceCommandHandler, DispatchOutcome};
