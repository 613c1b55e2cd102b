//! Domain layer
//!
//! Business logic and domain model for the device registry.

pub mod device;
