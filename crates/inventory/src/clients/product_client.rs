//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ProductError::AlreadyExists(id),
            FrameworkError::Storage(e) => ProductError::StorageError(e.to_string()),
            FrameworkError::EntityError(e) => match e.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Validate and store a new product.
    ///
    /// Returns the id it was stored under.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch a product, treating a missing id as an error.
    #[instrument(skip(self))]
    pub async fn find_product(&self, id: String) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.get(id.clone())
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Change the price of a stored product.
    ///
    /// The new price is validated like at creation; the stored record is untouched on failure.
    #[instrument(skip(self))]
    pub async fn update_price(&self, id: String, price: f64) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, ProductUpdate { price })
            .await
            .map_err(Self::map_error)
    }

    /// Every stored product, ordered by id.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Remove a product by id.
    pub async fn delete_product(&self, id: String) -> Result<(), ProductError> {
        self.delete(id).await
    }
}
