//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
///
/// The first four variants are validation failures raised by [`Product`](crate::model::Product)
/// itself; see [`ProductError::is_validation`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product id is empty or blank.
    #[error("Product ID cannot be empty")]
    EmptyId,

    /// The price is zero, negative, or not a finite number.
    #[error("Invalid price: {0} (must be a positive number)")]
    InvalidPrice(f64),

    /// The quantity is negative or does not fit a stock counter.
    #[error("Invalid quantity: {0} (cannot be negative)")]
    InvalidQuantity(i64),

    /// A stored record carries neither (or not the right) variant-specific field.
    #[error("Malformed product record: {0}")]
    MalformedRecord(String),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with the same id is already stored.
    #[error("A product with ID '{0}' already exists")]
    AlreadyExists(String),

    /// The backing file could not be read, parsed or written.
    #[error("Product storage error: {0}")]
    StorageError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// True for errors caused by invalid product data rather than by the store or lookup.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::EmptyId
                | ProductError::InvalidPrice(_)
                | ProductError::InvalidQuantity(_)
                | ProductError::MalformedRecord(_)
        )
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
