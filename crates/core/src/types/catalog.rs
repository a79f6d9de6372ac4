//! Products and the categories they belong to.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// A purchasable product.
///
/// The remote service guarantees `price >= 0` and `stock_quantity >= 0`;
/// this layer treats both as read-only facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: u64,
    pub category_id: CategoryId,
    /// Embedded category, present when the endpoint expands it.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether any stock remains.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_with_embedded_category() {
        let json = r#"{
            "id": 11,
            "name": "Kettle",
            "description": "Stove-top kettle",
            "price": "24.50",
            "stock_quantity": 5,
            "category_id": 2,
            "category": {
                "id": 2,
                "name": "Kitchen",
                "created_at": "2024-01-01T00:00:00.000000Z",
                "updated_at": "2024-01-01T00:00:00.000000Z"
            },
            "created_at": "2024-01-02T00:00:00.000000Z",
            "updated_at": "2024-01-02T00:00:00.000000Z"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.price, Decimal::new(2450, 2));
        assert!(product.in_stock());
        let category = product.category.expect("embedded category");
        assert_eq!(category.id, CategoryId::new(2));
        assert!(category.description.is_none());
    }

    #[test]
    fn test_product_out_of_stock() {
        let json = r#"{
            "id": 12,
            "name": "Teapot",
            "description": "",
            "price": 0,
            "stock_quantity": 0,
            "category_id": 2,
            "created_at": "2024-01-02T00:00:00.000000Z",
            "updated_at": "2024-01-02T00:00:00.000000Z"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert!(!product.in_stock());
        assert!(product.category.is_none());
        assert!(product.image_url.is_none());
    }
}
