//! # Product Actor
//!
//! This module implements the Product resource actor: the single writer of the product file.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use inventory::product_actor;
//! use inventory::clients::ProductClient;
//! use inventory::model::{ProductCreate, ProductKind};
//! use store_actor::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, generic_client) = product_actor::new(MemoryStore::new(), 32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         id: "E1".to_string(),
//!         name: "Phone".to_string(),
//!         price: 500.0,
//!         quantity: 10,
//!         kind: ProductKind::electronic("1 year"),
//!     };
//!     let id = client.create_product(params).await?;
//!
//!     let product = client.update_price(id, 450.0).await?;
//!     assert_eq!(product.price(), 450.0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use store_actor::{ResourceActor, ResourceClient, Store};

/// Creates a new Product actor over `store` and its client.
pub fn new<S: Store<Product>>(
    store: S,
    buffer_size: usize,
) -> (ResourceActor<Product, S>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, store)
}
