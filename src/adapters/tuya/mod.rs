//! Tuya OpenAPI adapter for the device platform port.

mod client;
mod sign;

pub use client::TuyaPlatformAdapter;
