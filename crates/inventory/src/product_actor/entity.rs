//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`store_actor::ResourceActor`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use store_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &String {
        Product::id(self)
    }

    /// Creates a new Product from creation parameters, validating every field.
    fn from_create_params(params: ProductCreate) -> Result<Self, ProductError> {
        Product::new(
            params.id,
            params.name,
            params.price,
            params.quantity,
            params.kind,
        )
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: validated the same way as at creation
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        self.set_price(update.price)
    }
}
