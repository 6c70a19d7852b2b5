use crate::clients::ProductClient;
use crate::config::InventoryConfig;
use crate::model::Product;
use crate::product_actor;
use store_actor::{JsonFileStore, Store};
use tracing::{error, info};

/// The runtime orchestrator for the inventory.
///
/// `InventorySystem` owns the product actor task and hands out the client used to talk to it.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::start(&config);
///
/// let id = system.product_client.create_product(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the product actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the product actor over the JSON file named in `config`.
    ///
    /// The file is not touched until the first request arrives.
    pub fn start(config: &InventoryConfig) -> Self {
        info!(file = %config.file.display(), "Starting inventory");
        Self::with_store(
            JsonFileStore::new(&config.file),
            usize::from(config.buffer_size),
        )
    }

    /// Starts the product actor over any store.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_store<S: Store<Product>>(store: S, buffer_size: usize) -> Self {
        let (actor, resource_client) = product_actor::new(store, buffer_size);
        let handle = tokio::spawn(actor.run(()));

        Self {
            product_client: ProductClient::new(resource_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the actor's channel, then waits for the actor task.
    /// Requests already queued are still processed. Clones of the client that are still
    /// alive keep the actor running, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
