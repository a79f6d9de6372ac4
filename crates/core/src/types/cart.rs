//! Cart lines owned by the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Product;
use super::id::{CartItemId, ProductId, UserId};

/// One line in the session user's cart.
///
/// Created on add-to-cart, mutated (quantity only) on update, destroyed on
/// remove or full cart clear. The remote service guarantees `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Product snapshot embedded by the cart endpoints.
    pub product: Product,
    pub quantity: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
