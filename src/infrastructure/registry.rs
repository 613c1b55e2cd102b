use crate::domain::device::{DeviceAddress, DeviceRecord, DeviceRegistry, RegistryError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory device registry.
///
/// The map lives for the process lifetime and starts empty on every boot;
/// nothing is persisted. axum serves requests in parallel, so the map sits
/// behind an `RwLock` and each operation holds the guard for a single map
/// access.
pub struct InMemoryDeviceRegistry {
    devices: Arc<RwLock<HashMap<DeviceAddress, DeviceRecord>>>,
}

impl Default for InMemoryDeviceRegistry {
    fn default() -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl InMemoryDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceRegistry for InMemoryDeviceRegistry {
    async fn upsert(&self, record: DeviceRecord) -> Result<(), RegistryError> {
        let mut devices = self.devices.write().await;
        devices.insert(record.ip_address.clone(), record);
        Ok(())
    }

    async fn remove(&self, address: &DeviceAddress) -> Result<(), RegistryError> {
        let mut devices = self.devices.write().await;
        devices.remove(address);
        Ok(())
    }

    async fn get(&self, address: &DeviceAddress) -> Result<Option<DeviceRecord>, RegistryError> {
        let devices = self.devices.read().await;
        Ok(devices.get(address).cloned())
    }

    async fn list(&self) -> Result<Vec<DeviceRecord>, RegistryError> {
        let devices = self.devices.read().await;
        Ok(devices.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), RegistryError> {
        let mut devices = self.devices.write().await;
        devices.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, RegistryError> {
        let devices = self.devices.read().await;
        Ok(devices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn record(ip: &str, fields: Value) -> DeviceRecord {
        let attributes: Map<String, Value> = fields.as_object().cloned().unwrap_or_default();
        DeviceRecord::new(DeviceAddress::new(ip), attributes)
    }

    #[tokio::test]
    async fn test_upsert_then_get_returns_submitted_fields() {
        let registry = InMemoryDeviceRegistry::new();
        registry
            .upsert(record("10.0.0.5", json!({"model": "sensor-A"})))
            .await
            .unwrap();

        let stored = registry
            .get(&DeviceAddress::new("10.0.0.5"))
            .await
            .unwrap()
            .expect("record should be stored");
        assert_eq!(stored.ip_address.as_str(), "10.0.0.5");
        assert_eq!(stored.attributes["model"], json!("sensor-A"));
    }

    #[tokio::test]
    async fn test_reregistration_replaces_whole_record() {
        let registry = InMemoryDeviceRegistry::new();
        registry
            .upsert(record(
                "10.0.0.5",
                json!({"model": "sensor-A", "firmware": "1.0.3"}),
            ))
            .await
            .unwrap();
        registry
            .upsert(record("10.0.0.5", json!({"model": "sensor-B"})))
            .await
            .unwrap();

        let stored = registry
            .get(&DeviceAddress::new("10.0.0.5"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.attributes["model"], json!("sensor-B"));
        // No merge: the field only the first submission carried is gone
        assert!(!stored.attributes.contains_key("firmware"));
        assert_eq!(registry.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_counts_distinct_addresses() {
        let registry = InMemoryDeviceRegistry::new();
        for i in 1..=3 {
            registry
                .upsert(record(&format!("10.0.0.{i}"), json!({"slot": i})))
                .await
                .unwrap();
        }
        assert_eq!(registry.list().await.unwrap().len(), 3);

        // Re-registering an existing address does not grow the registry
        registry
            .upsert(record("10.0.0.2", json!({"slot": 99})))
            .await
            .unwrap();
        assert_eq!(registry.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_remove_unknown_address_is_a_noop() {
        let registry = InMemoryDeviceRegistry::new();
        registry
            .remove(&DeviceAddress::new("198.51.100.1"))
            .await
            .unwrap();
        assert_eq!(registry.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let registry = InMemoryDeviceRegistry::new();
        registry
            .upsert(record("10.0.0.1", json!({})))
            .await
            .unwrap();
        registry
            .upsert(record("10.0.0.2", json!({})))
            .await
            .unwrap();

        registry.remove(&DeviceAddress::new("10.0.0.1")).await.unwrap();
        assert!(
            registry
                .get(&DeviceAddress::new("10.0.0.1"))
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(registry.count().await.unwrap(), 1);

        registry.clear().await.unwrap();
        assert_eq!(registry.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_returned_records_are_clones() {
        let registry = InMemoryDeviceRegistry::new();
        registry
            .upsert(record("10.0.0.5", json!({"relay_state": "OFF"})))
            .await
            .unwrap();

        let mut fetched = registry
            .get(&DeviceAddress::new("10.0.0.5"))
            .await
            .unwrap()
            .unwrap();
        fetched
            .attributes
            .insert("relay_state".to_string(), json!("ON"));

        // Mutating the returned record must not touch the stored one
        let stored = registry
            .get(&DeviceAddress::new("10.0.0.5"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.attributes["relay_state"], json!("OFF"));
    }
}
