use serde::{Deserialize, Serialize};

use crate::model::ProductRecord;
use crate::product_actor::ProductError;
use std::fmt::{self, Display};
use tracing::warn;

/// The variant-specific part of a product. A product is exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Electronic { warranty: String },
    Food { expiration_date: String },
}

impl ProductKind {
    pub fn electronic(warranty: impl Into<String>) -> Self {
        ProductKind::Electronic {
            warranty: warranty.into(),
        }
    }

    pub fn food(expiration_date: impl Into<String>) -> Self {
        ProductKind::Food {
            expiration_date: expiration_date.into(),
        }
    }
}

impl Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Electronic { warranty } => write!(f, "Warranty: {}", warranty),
            ProductKind::Food { expiration_date } => {
                write!(f, "Expiration date: {}", expiration_date)
            }
        }
    }
}

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](store_actor::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
///
/// # Persistence
/// Products are (de)serialized through [`ProductRecord`](crate::model::ProductRecord). A
/// record read back from disk is checked like [`Product::new`] except for its price: files
/// written by older versions may hold a price that was never validated, and such a product
/// must stay reachable so it can be repriced or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    quantity: u32,
    kind: ProductKind,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, also the key the product is stored under
    /// * `name` - Product name
    /// * `price` - Unit price, must be positive
    /// * `quantity` - Available stock quantity, must not be negative
    /// * `kind` - Electronic or food specific data
    ///
    /// # Errors
    /// [`ProductError::EmptyId`], [`ProductError::InvalidPrice`] or
    /// [`ProductError::InvalidQuantity`]. Nothing is constructed on failure.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        let id = validate_id(id.into())?;
        let price = validate_price(price)?;
        let quantity = validate_quantity(quantity)?;
        Ok(Self {
            id,
            name: name.into(),
            price,
            quantity,
            kind,
        })
    }

    pub fn electronic(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        warranty: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Self::new(id, name, price, quantity, ProductKind::electronic(warranty))
    }

    pub fn food(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiration_date: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Self::new(id, name, price, quantity, ProductKind::food(expiration_date))
    }

    /// Rebuilds a stored product. The price is taken as stored; see [`Product::has_valid_price`].
    pub(crate) fn from_stored(
        id: String,
        name: String,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        let id = validate_id(id)?;
        let quantity = validate_quantity(quantity)?;
        if validate_price(price).is_err() {
            warn!(%id, price, "Stored product has an invalid price");
        }
        Ok(Self {
            id,
            name,
            price,
            quantity,
            kind,
        })
    }

    pub fn id(&self) -> &String {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// False only for stored products whose price predates validation.
    pub fn has_valid_price(&self) -> bool {
        validate_price(self.price).is_ok()
    }

    /// The only mutable field. Re-validated like at construction.
    pub fn set_price(&mut self, price: f64) -> Result<(), ProductError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    /// One line for the full listing, price included.
    pub fn summary(&self) -> String {
        format!(
            "Id: {} - {} - Quantity: {} - {} - Price: {}",
            self.id, self.name, self.quantity, self.kind, self.price
        )
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(ID: {}) {}  Quantity: {} - {}",
            self.id, self.name, self.quantity, self.kind
        )
    }
}

fn validate_id(id: String) -> Result<String, ProductError> {
    if id.trim().is_empty() {
        return Err(ProductError::EmptyId);
    }
    Ok(id)
}

fn validate_price(price: f64) -> Result<f64, ProductError> {
    // Written this way round so NaN is rejected too.
    if !(price > 0.0) || !price.is_finite() {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price)
}

fn validate_quantity(quantity: i64) -> Result<u32, ProductError> {
    u32::try_from(quantity).map_err(|_| ProductError::InvalidQuantity(quantity))
}

/// DTO for Product creation.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub kind: ProductKind,
}

/// DTO for Product updates. Only the price can change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product::electronic("E1", "Phone", 500.0, 10, "1 year").unwrap()
    }

    #[test]
    fn test_valid_products_construct() {
        let product = phone();
        assert_eq!(product.id(), "E1");
        assert_eq!(product.name(), "Phone");
        assert_eq!(product.price(), 500.0);
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.kind(), &ProductKind::electronic("1 year"));

        let milk = Product::food("F1", "Milk", 1.25, 0, "2025-01-31").unwrap();
        assert_eq!(milk.quantity(), 0);
        assert_eq!(milk.kind(), &ProductKind::food("2025-01-31"));
    }

    #[test]
    fn test_empty_or_blank_id_is_rejected() {
        for id in ["", "   "] {
            let result = Product::electronic(id, "Phone", 500.0, 10, "1 year");
            assert_eq!(result, Err(ProductError::EmptyId));
        }
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        for price in [0.0, -0.01, -500.0] {
            let result = Product::food("F1", "Milk", price, 1, "tomorrow");
            assert_eq!(result, Err(ProductError::InvalidPrice(price)));
        }
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        assert!(matches!(
            Product::food("F1", "Milk", f64::NAN, 1, "tomorrow"),
            Err(ProductError::InvalidPrice(p)) if p.is_nan()
        ));
        assert_eq!(
            Product::food("F1", "Milk", f64::INFINITY, 1, "tomorrow"),
            Err(ProductError::InvalidPrice(f64::INFINITY))
        );
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let result = Product::electronic("E1", "Phone", 500.0, -1, "1 year");
        assert_eq!(result, Err(ProductError::InvalidQuantity(-1)));
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_quantity_beyond_counter_range_is_rejected() {
        let too_many = i64::from(u32::MAX) + 1;
        let result = Product::electronic("E1", "Phone", 500.0, too_many, "1 year");
        assert_eq!(result, Err(ProductError::InvalidQuantity(too_many)));
    }

    #[test]
    fn test_stored_product_keeps_unvalidated_price_until_repriced() {
        let mut product = Product::from_stored(
            "F1".into(),
            "Milk".into(),
            0.0,
            3,
            ProductKind::food("2025-01-31"),
        )
        .unwrap();
        assert_eq!(product.price(), 0.0);
        assert!(!product.has_valid_price());

        product.set_price(1.5).unwrap();
        assert!(product.has_valid_price());
    }

    #[test]
    fn test_stored_product_still_checks_id_and_quantity() {
        let kind = ProductKind::electronic("1 year");
        assert_eq!(
            Product::from_stored(" ".into(), "Phone".into(), 5.0, 1, kind.clone()),
            Err(ProductError::EmptyId)
        );
        assert_eq!(
            Product::from_stored("E1".into(), "Phone".into(), 5.0, -1, kind),
            Err(ProductError::InvalidQuantity(-1))
        );
    }

    #[test]
    fn test_set_price_revalidates() {
        let mut product = phone();

        product.set_price(450.0).unwrap();
        assert_eq!(product.price(), 450.0);

        assert_eq!(product.set_price(0.0), Err(ProductError::InvalidPrice(0.0)));
        assert_eq!(product.price(), 450.0, "Rejected price must not stick");
    }

    #[test]
    fn test_display_describes_product() {
        assert_eq!(
            phone().to_string(),
            "(ID: E1) Phone  Quantity: 10 - Warranty: 1 year"
        );

        let milk = Product::food("F1", "Milk", 1.25, 3, "2025-01-31").unwrap();
        assert_eq!(
            milk.to_string(),
            "(ID: F1) Milk  Quantity: 3 - Expiration date: 2025-01-31"
        );
    }

    #[test]
    fn test_summary_includes_price() {
        assert_eq!(
            phone().summary(),
            "Id: E1 - Phone - Quantity: 10 - Warranty: 1 year - Price: 500"
        );
    }
}
