//! Product summary type.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A denormalized product record as listed by the storefront.
///
/// This is the record the product grid and detail pages render, and the
/// source of the display fields copied into the cart on add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Short description for listings.
    pub description: Option<String>,
    /// Unit price.
    pub unit_price: Money,
    /// Units currently in stock.
    pub stock: i64,
    /// Category, if assigned.
    pub category: Option<CategoryId>,
    /// Primary image reference.
    pub image_ref: Option<String>,
    /// Whether the product is visible to customers.
    pub is_active: bool,
}

impl ProductSummary {
    /// Check if any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product can be added to a cart.
    pub fn purchasable(&self) -> bool {
        self.is_active && self.in_stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(stock: i64, active: bool) -> ProductSummary {
        ProductSummary {
            id: ProductId::new("p1"),
            name: "Tomato".to_string(),
            sku: "VEG-TOM-001".to_string(),
            description: None,
            unit_price: Money::new(599, Currency::USD),
            stock,
            category: None,
            image_ref: None,
            is_active: active,
        }
    }

    #[test]
    fn test_in_stock() {
        assert!(product(3, true).in_stock());
        assert!(!product(0, true).in_stock());
    }

    #[test]
    fn test_purchasable_requires_active_and_stock() {
        assert!(product(3, true).purchasable());
        assert!(!product(3, false).purchasable());
        assert!(!product(0, true).purchasable());
    }
}
