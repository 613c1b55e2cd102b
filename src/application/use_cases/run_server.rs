use crate::HubConfig;
use crate::domain::device::DeviceRegistry;
use crate::interfaces::web::server::create_server;
use std::sync::Arc;

/// Runs the hub: the registry API plus the embedded dashboard.
pub struct RunServerUseCase {
    registry: Arc<dyn DeviceRegistry>,
}

impl RunServerUseCase {
    pub fn new(registry: Arc<dyn DeviceRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, config: HubConfig) -> anyhow::Result<()> {
        create_server(config, Arc::clone(&self.registry)).await
    }
}
