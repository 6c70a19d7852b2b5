//! # Inventory
//!
//! A product catalog with electronic and food products, persisted as one JSON document and
//! driven by a console menu.
//!
//! - **[model]**: [`Product`](model::Product), its variants and the on-disk record shape
//! - **[product_actor]**: the single-writer actor over the product file
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the typed request API
//! - **[lifecycle]**: [`InventorySystem`](lifecycle::InventorySystem) start and shutdown
//! - **[config]** and **[console]**: what the `inventory` binary is made of

pub mod clients;
pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
