//! On-disk shape of a product.
//!
//! Keys follow the existing data file format (`id_producto`, `nombre`, `precio`, `cantidad`,
//! plus `garantia` or `fecha_expiracion`). Newly written records also carry an explicit
//! `tipo` tag; records without one are classified by which variant field they hold.

use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductKind};
use crate::product_actor::ProductError;

/// Discriminant stored under `tipo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "electronico")]
    Electronic,
    #[serde(rename = "alimenticio")]
    Food,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
    #[serde(rename = "id_producto")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "garantia", default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(
        rename = "fecha_expiracion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<String>,
}

impl ProductRecord {
    fn resolve_kind(&mut self) -> Result<ProductKind, ProductError> {
        let warranty = self.warranty.take();
        let expiration_date = self.expiration_date.take();

        match (self.kind, warranty, expiration_date) {
            (Some(RecordKind::Electronic), Some(warranty), _) => {
                Ok(ProductKind::Electronic { warranty })
            }
            (Some(RecordKind::Food), _, Some(expiration_date)) => {
                Ok(ProductKind::Food { expiration_date })
            }
            (Some(RecordKind::Electronic), None, _) => Err(ProductError::MalformedRecord(format!(
                "electronic product '{}' has no garantia",
                self.id
            ))),
            (Some(RecordKind::Food), _, None) => Err(ProductError::MalformedRecord(format!(
                "food product '{}' has no fecha_expiracion",
                self.id
            ))),
            // Untagged: warranty wins when both fields are present
            (None, Some(warranty), _) => Ok(ProductKind::Electronic { warranty }),
            (None, None, Some(expiration_date)) => Ok(ProductKind::Food { expiration_date }),
            (None, None, None) => Err(ProductError::MalformedRecord(format!(
                "product '{}' has neither garantia nor fecha_expiracion",
                self.id
            ))),
        }
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        let (kind, warranty, expiration_date) = match product.kind().clone() {
            ProductKind::Electronic { warranty } => (RecordKind::Electronic, Some(warranty), None),
            ProductKind::Food { expiration_date } => {
                (RecordKind::Food, None, Some(expiration_date))
            }
        };
        Self {
            kind: Some(kind),
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
            quantity: i64::from(product.quantity()),
            warranty,
            expiration_date,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(mut record: ProductRecord) -> Result<Self, Self::Error> {
        let kind = record.resolve_kind()?;
        Product::from_stored(record.id, record.name, record.price, record.quantity, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_electronic_product_serializes_with_tag() {
        let product = Product::electronic("E1", "Phone", 500.0, 10, "1 year").unwrap();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(
            value,
            json!({
                "tipo": "electronico",
                "id_producto": "E1",
                "nombre": "Phone",
                "precio": 500.0,
                "cantidad": 10,
                "garantia": "1 year"
            })
        );
    }

    #[test]
    fn test_food_product_serializes_with_tag() {
        let product = Product::food("F1", "Milk", 1.25, 3, "2025-01-31").unwrap();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["tipo"], "alimenticio");
        assert_eq!(value["fecha_expiracion"], "2025-01-31");
        assert!(value.get("garantia").is_none());
    }

    #[test]
    fn test_untagged_records_are_classified_by_shape() {
        let phone: Product = serde_json::from_value(json!({
            "id_producto": "E1",
            "nombre": "Phone",
            "precio": 500,
            "cantidad": 10,
            "garantia": "1 year"
        }))
        .unwrap();
        assert_eq!(phone.kind(), &ProductKind::electronic("1 year"));
        assert_eq!(phone.price(), 500.0);

        let milk: Product = serde_json::from_value(json!({
            "id_producto": "F1",
            "nombre": "Milk",
            "precio": 1.25,
            "cantidad": 3,
            "fecha_expiracion": "2025-01-31"
        }))
        .unwrap();
        assert_eq!(milk.kind(), &ProductKind::food("2025-01-31"));
    }

    #[test]
    fn test_untagged_record_with_both_fields_is_electronic() {
        let product: Product = serde_json::from_value(json!({
            "id_producto": "X1",
            "nombre": "Odd",
            "precio": 2.0,
            "cantidad": 1,
            "garantia": "6 months",
            "fecha_expiracion": "2025-01-31"
        }))
        .unwrap();
        assert_eq!(product.kind(), &ProductKind::electronic("6 months"));
    }

    #[test]
    fn test_tag_decides_over_shape() {
        let product: Product = serde_json::from_value(json!({
            "tipo": "alimenticio",
            "id_producto": "X1",
            "nombre": "Odd",
            "precio": 2.0,
            "cantidad": 1,
            "garantia": "6 months",
            "fecha_expiracion": "2025-01-31"
        }))
        .unwrap();
        assert_eq!(product.kind(), &ProductKind::food("2025-01-31"));
    }

    #[test]
    fn test_record_without_variant_field_is_malformed() {
        let record = ProductRecord {
            kind: None,
            id: "X1".into(),
            name: "Nothing".into(),
            price: 1.0,
            quantity: 1,
            warranty: None,
            expiration_date: None,
        };
        assert!(matches!(
            Product::try_from(record),
            Err(ProductError::MalformedRecord(msg)) if msg.contains("X1")
        ));

        let tagged = ProductRecord {
            kind: Some(RecordKind::Electronic),
            id: "X2".into(),
            name: "Nothing".into(),
            price: 1.0,
            quantity: 1,
            warranty: None,
            expiration_date: Some("2025-01-31".into()),
        };
        assert!(matches!(
            Product::try_from(tagged),
            Err(ProductError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_products_survive_serialization_round_trip() {
        let products = [
            Product::electronic("E1", "Phone", 499.99, 10, "1 year").unwrap(),
            Product::food("F1", "Milk", 1.25, 0, "2025-01-31").unwrap(),
        ];
        for product in products {
            let encoded = serde_json::to_string(&product).unwrap();
            let decoded: Product = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, product);
        }
    }

    #[test]
    fn test_stored_invalid_price_is_loaded_as_is() {
        let product: Product = serde_json::from_value(json!({
            "id_producto": "F1",
            "nombre": "Milk",
            "precio": 0,
            "cantidad": 3,
            "fecha_expiracion": "2025-01-31"
        }))
        .unwrap();
        assert_eq!(product.price(), 0.0);
        assert!(!product.has_valid_price());
    }

    #[test]
    fn test_stored_negative_quantity_is_rejected() {
        let result = serde_json::from_value::<Product>(json!({
            "id_producto": "E1",
            "nombre": "Phone",
            "precio": 3.0,
            "cantidad": -10,
            "garantia": "1 year"
        }));
        assert!(result.unwrap_err().to_string().contains("Invalid quantity"));
    }

    #[test]
    fn test_unknown_tag_fails_to_parse() {
        let result = serde_json::from_value::<Product>(json!({
            "tipo": "ropa",
            "id_producto": "C1",
            "nombre": "Shirt",
            "precio": 10.0,
            "cantidad": 1,
            "garantia": "none"
        }));
        assert!(result.is_err());
    }
}
