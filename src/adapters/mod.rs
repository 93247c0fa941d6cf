//! Adapters - HTTP surface and vendor platform integrations.

pub mod http;
pub mod tuya;
