//! Device value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network address a device registers under.
///
/// The address is the registry key. The hub does not validate its format:
/// whatever string the device reports is used verbatim, so a hostname or a
/// malformed address is stored just like a dotted quad.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for DeviceAddress {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}
