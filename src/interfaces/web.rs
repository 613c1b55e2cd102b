//! Web interface
//!
//! HTTP API and dashboard for the device registry: device registration,
//! device listing, server time, and the embedded single-page dashboard.

mod embedded_assets;
mod error_response;
mod handlers;
mod models;

pub mod server;

pub(crate) use handlers::{AppState, list_devices, register_device, server_time};
