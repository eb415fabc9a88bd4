//! Wishlist slice.

use greenmart_commerce::catalog::ProductSummary;
use greenmart_commerce::ids::ProductId;
use greenmart_commerce::wishlist::Wishlist;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The saved-products slice. Delegates to the domain [`Wishlist`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WishlistSlice {
    wishlist: Wishlist,
}

impl WishlistSlice {
    /// Create an empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Saved-product count for the navbar badge.
    pub fn badge_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Save a product. Duplicate saves are no-ops.
    pub fn add(&mut self, product: ProductSummary) -> bool {
        let added = self.wishlist.add(product);
        if added {
            debug!(count = self.wishlist.len(), "wishlist item added");
        }
        added
    }

    /// Remove a saved product. Idempotent.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        self.wishlist.remove(product_id)
    }

    /// Check whether a product is saved (drives the heart toggle).
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.wishlist.clear();
    }
}
