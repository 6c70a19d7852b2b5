//! Command-line and environment configuration for the `inventory` binary.

use clap::Parser;
use std::path::PathBuf;

/// Runtime settings. Every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory")]
#[command(about = "Console inventory manager backed by a JSON file")]
#[command(version)]
pub struct InventoryConfig {
    /// JSON file holding the product collection
    #[arg(long, env = "INVENTORY_FILE", default_value = "productos_db.json")]
    pub file: PathBuf,

    /// Capacity of the product actor's request queue
    #[arg(long, env = "INVENTORY_BUFFER_SIZE", default_value_t = 32, value_parser = clap::value_parser!(u16).range(1..))]
    pub buffer_size: u16,

    /// Do not clear the screen or wait for enter between actions
    #[arg(long)]
    pub no_clear: bool,
}

impl InventoryConfig {
    pub fn clear_screen(&self) -> bool {
        !self.no_clear
    }
}
