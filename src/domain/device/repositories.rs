//! Device registry repository trait

use crate::domain::device::entities::DeviceRecord;
use crate::domain::device::value_objects::DeviceAddress;
use async_trait::async_trait;
use thiserror::Error;

/// Device registry errors.
///
/// The in-memory backend never produces one; the variant exists so the trait
/// stays implementable by backends that can actually fail.
#[derive(Debug, Error, Clone)]
pub enum RegistryError {
    #[error("Registry backend error: {0}")]
    Backend(String),
}

/// Process-lifetime mapping from device address to its most recent record.
///
/// Accessors return clones; a stored record can only change through
/// [`DeviceRegistry::upsert`].
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Insert the record, or fully replace the existing one for the same
    /// address. Last write wins; fields are never merged.
    async fn upsert(&self, record: DeviceRecord) -> Result<(), RegistryError>;

    /// Delete the record for `address`. Deleting an unknown address is a
    /// no-op, not an error.
    async fn remove(&self, address: &DeviceAddress) -> Result<(), RegistryError>;

    /// The record stored for `address`, if any.
    async fn get(&self, address: &DeviceAddress) -> Result<Option<DeviceRecord>, RegistryError>;

    /// Every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<DeviceRecord>, RegistryError>;

    /// Drop every record. Not reachable over HTTP; kept for tests and resets.
    async fn clear(&self) -> Result<(), RegistryError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, RegistryError> {
        Ok(self.list().await?.len())
    }
}
