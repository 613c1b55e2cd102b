mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use relay_hub::HubConfig;
use relay_hub::application::use_cases::RunServerUseCase;
use relay_hub::debug::{DebugConfig, init_logging};
use relay_hub::infrastructure::registry::InMemoryDeviceRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let debug_config = DebugConfig::default();
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let cli = Cli::parse();

    // Dependency injection: the registry is built here and handed down, so
    // tests can construct their own isolated instances
    let registry = Arc::new(InMemoryDeviceRegistry::new());

    match cli.command {
        Commands::Run { port, host } => {
            info!(
                "Starting relay-hub {} (built {})",
                env!("CARGO_PKG_VERSION"),
                env!("BUILD_TIMESTAMP")
            );
            let use_case = RunServerUseCase::new(registry);

            match use_case.execute(HubConfig { host, port }).await {
                Ok(()) => {
                    info!("Hub terminated normally");
                }
                Err(e) => {
                    error!("Hub failed: {}", e);
                    eprintln!("❌ Hub failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
