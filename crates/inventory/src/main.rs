//! # Inventory Manager
//!
//! Console entry point. Settings come from flags or the environment (see
//! [`InventoryConfig`]); logs go to stderr and are filtered with `RUST_LOG`.

use clap::Parser;
use inventory::config::InventoryConfig;
use inventory::console::Console;
use inventory::lifecycle::InventorySystem;
use store_actor::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = InventoryConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let system = InventorySystem::start(&config);

    let result = {
        let stdin = std::io::stdin();
        let mut console = Console::new(
            system.product_client.clone(),
            stdin.lock(),
            std::io::stdout(),
            config.clear_screen(),
        );
        console.run().await
    };

    if let Err(e) = &result {
        error!(error = %e, "Console failed");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    result.map_err(|e| e.to_string())
}
