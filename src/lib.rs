//! # Relay Hub
//!
//! Central hub for small WiFi relay boards. Devices announce themselves with
//! an HTTP POST and the hub keeps the most recent record per device address
//! in memory, serving a dashboard and a small JSON API on top of it.
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer**: device records and the registry trait
//! - **Application Layer**: use cases
//! - **Infrastructure Layer**: the in-memory registry backend
//! - **Interface Layer**: the axum web server and embedded dashboard

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Network configuration for the hub process.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HubConfig {
    fn default() -> Self {
        // Port 80 keeps the firmware's default hub URL working; binding it
        // usually requires elevated rights
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
        }
    }
}
