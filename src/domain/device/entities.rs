//! Device registry entities

use crate::domain::device::value_objects::DeviceAddress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Last-known state of one registered device.
///
/// A record is the registration payload stored verbatim, plus the hub-assigned
/// registration timestamp. Re-registering the same address replaces the whole
/// record; fields from an earlier submission are never merged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Address the device registered under; doubles as the registry key.
    pub ip_address: DeviceAddress,
    /// Every other field from the registration payload, untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    /// Stamped by the hub when the record is created or replaced.
    pub registered_at: DateTime<Utc>,
}

impl DeviceRecord {
    /// Build a record from a registration payload, stamping it with the
    /// current time.
    ///
    /// The `ip_address` and `registered_at` keys are dropped from
    /// `attributes` if present; the dedicated fields always win, and keeping
    /// copies in the map would duplicate keys in the serialized record.
    pub fn new(ip_address: DeviceAddress, mut attributes: Map<String, Value>) -> Self {
        attributes.remove("ip_address");
        attributes.remove("registered_at");
        Self {
            ip_address,
            attributes,
            registered_at: Utc::now(),
        }
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.ip_address
    }
}
