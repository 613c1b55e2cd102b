//! Device aggregate
//!
//! A device is whatever a relay node reports about itself, keyed by the
//! network address it registered under.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::DeviceRecord;
pub use repositories::{DeviceRegistry, RegistryError};
pub use value_objects::DeviceAddress;
