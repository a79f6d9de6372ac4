//! Cart aggregation: derive display totals from a list of cart lines.

use rust_decimal::Decimal;

use crate::types::CartItem;

/// Totals derived from the cart lines currently in local state.
///
/// Amounts are exact decimal sums; callers format for display, not this
/// module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line quantities.
    pub total_items: u64,
    /// Sum of `product.price * quantity` across lines.
    pub total_amount: Decimal,
}

impl CartTotals {
    /// Aggregate a cart.
    ///
    /// Upstream state may be transiently unset, so a missing collection is
    /// treated as empty rather than an error.
    #[must_use]
    pub fn of(lines: Option<&[CartItem]>) -> Self {
        lines.map_or_else(Self::default, |lines| {
            lines.iter().fold(Self::default(), |acc, line| Self {
                total_items: acc.total_items + line.quantity,
                total_amount: acc.total_amount
                    + line.product.price * Decimal::from(line.quantity),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::{CartItemId, CategoryId, Product, ProductId, UserId};

    fn line(id: i64, price: Decimal, quantity: u64) -> CartItem {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("timestamp");
        CartItem {
            id: CartItemId::new(id),
            user_id: UserId::new(1),
            product_id: ProductId::new(id * 100),
            product: Product {
                id: ProductId::new(id * 100),
                name: format!("product-{id}"),
                description: String::new(),
                price,
                stock_quantity: 10,
                category_id: CategoryId::new(1),
                category: None,
                image_url: None,
                created_at: at,
                updated_at: at,
            },
            quantity,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_totals_sum_prices_and_quantities() {
        let lines = vec![line(1, Decimal::from(10), 2), line(2, Decimal::from(5), 3)];
        let totals = CartTotals::of(Some(&lines));
        assert_eq!(totals.total_items, 5);
        assert_eq!(totals.total_amount, Decimal::from(35));
    }

    #[test]
    fn test_totals_empty_cart_is_zero() {
        let totals = CartTotals::of(Some(&[]));
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn test_totals_missing_cart_is_zero() {
        let totals = CartTotals::of(None);
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_total_items_at_least_distinct_lines() {
        let lines = vec![
            line(1, Decimal::new(199, 2), 1),
            line(2, Decimal::new(50, 2), 4),
            line(3, Decimal::from(12), 2),
        ];
        let totals = CartTotals::of(Some(&lines));
        assert!(totals.total_items >= lines.len() as u64);
        assert_eq!(totals.total_items, 7);
    }

    #[test]
    fn test_totals_exact_decimal_arithmetic() {
        // 0.10 * 3 must be exactly 0.30, not a float approximation.
        let lines = vec![line(1, Decimal::new(10, 2), 3)];
        let totals = CartTotals::of(Some(&lines));
        assert_eq!(totals.total_amount, Decimal::new(30, 2));
    }
}
