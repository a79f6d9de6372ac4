//! Orders and their line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::Product;
use super::id::{OrderId, OrderItemId, ProductId, UserId};

/// A placed order.
///
/// Created once at checkout submission and immutable from this layer's
/// perspective; no edit or cancel operations are exposed. The status set is
/// owned by the remote service and treated as an opaque string here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// Product snapshot embedded by the order endpoints.
    pub product: Product,
    pub quantity: u64,
    /// Unit price at the time of order, independent of the current
    /// `Product::price`.
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes() {
        let json = r#"{
            "id": 9,
            "user_id": 1,
            "total_amount": "49.00",
            "status": "pending",
            "shipping_address": "1 Main St",
            "payment_method": "cash_on_delivery",
            "items": [
                {
                    "id": 21,
                    "order_id": 9,
                    "product_id": 11,
                    "product": {
                        "id": 11,
                        "name": "Kettle",
                        "description": "",
                        "price": "26.00",
                        "stock_quantity": 3,
                        "category_id": 2,
                        "created_at": "2024-01-02T00:00:00.000000Z",
                        "updated_at": "2024-01-02T00:00:00.000000Z"
                    },
                    "quantity": 2,
                    "price": "24.50",
                    "created_at": "2024-03-01T00:00:00.000000Z",
                    "updated_at": "2024-03-01T00:00:00.000000Z"
                }
            ],
            "created_at": "2024-03-01T00:00:00.000000Z",
            "updated_at": "2024-03-01T00:00:00.000000Z"
        }"#;

        let order: Order = serde_json::from_str(json).expect("deserialize");
        assert_eq!(order.status, "pending");
        assert_eq!(order.items.len(), 1);

        // Line price is the snapshot at order time, not the current price.
        let line = &order.items[0];
        assert_eq!(line.price, Decimal::new(2450, 2));
        assert_ne!(line.price, line.product.price);
    }
}
