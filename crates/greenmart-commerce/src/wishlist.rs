//! Wishlist: products the customer has saved for later.

use crate::catalog::ProductSummary;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered set of saved products, keyed by unique product ID.
///
/// The count is always `items.len()`; there is no separately tracked total
/// to drift.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<ProductSummary>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved products, in insertion order.
    pub fn items(&self) -> &[ProductSummary] {
        &self.items
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Save a product. Adding a product that is already saved is a no-op
    /// returning `false`.
    pub fn add(&mut self, product: ProductSummary) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove a saved product. Idempotent; absent IDs return `false`.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        self.items.len() < len_before
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use crate::money::{Currency, Money};

    fn product(id: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(id),
            name: id.to_string(),
            sku: format!("SKU-{}", id),
            description: None,
            unit_price: Money::new(599, Currency::USD),
            stock: 3,
            category: Some(CategoryId::new("veg")),
            image_ref: None,
            is_active: true,
        }
    }

    #[test]
    fn test_add_and_contains() {
        let mut list = Wishlist::new();
        assert!(list.add(product("p1")));
        assert!(list.contains(&ProductId::new("p1")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut list = Wishlist::new();
        assert!(list.add(product("p1")));
        assert!(!list.add(product("p1")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = Wishlist::new();
        list.add(product("p1"));
        assert!(list.remove(&ProductId::new("p1")));
        assert!(!list.remove(&ProductId::new("p1")));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = Wishlist::new();
        list.add(product("p1"));
        list.add(product("p2"));
        list.clear();
        assert!(list.is_empty());
    }
}
