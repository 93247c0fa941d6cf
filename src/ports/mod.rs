//! Ports - trait seams to external collaborators.

mod device_platform;

pub use device_platform::{DevicePlatform, DeviceSession, PlatformError};
