//! Lumen Bridge - conversational smart-light control adapter
//!
//! This crate translates direct REST calls and Dialogflow webhook events
//! into single-shot device commands on the Tuya cloud platform.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
