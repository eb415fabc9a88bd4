//! Cart slice.

use greenmart_commerce::cart::{Cart, CartSnapshot};
use greenmart_commerce::error::CommerceError;
use greenmart_commerce::ids::ProductId;
use greenmart_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The shopping cart slice.
///
/// Thin wrapper over the domain [`Cart`] that adds mutation logging and the
/// badge figures the navbar reads. All invariant enforcement lives in the
/// domain type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSlice {
    cart: Cart,
}

impl CartSlice {
    /// Create an empty cart slice.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
        }
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Item count for the navbar badge.
    pub fn badge_count(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Cart total for the navbar badge.
    pub fn badge_total(&self) -> Money {
        self.cart.total_price()
    }

    /// Add a product to the cart. See [`Cart::add_item`].
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: Option<String>,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        let result = self
            .cart
            .add_item(product_id.clone(), name, unit_price, image_ref, quantity);
        match &result {
            Ok(()) => debug!(
                product_id = %product_id,
                quantity,
                total_quantity = self.cart.total_quantity(),
                "cart item added"
            ),
            Err(e) => warn!(product_id = %product_id, quantity, error = %e, "cart add rejected"),
        }
        result
    }

    /// Remove a product from the cart. See [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            debug!(product_id = %product_id, "cart item removed");
        }
        removed
    }

    /// Set a line item's quantity. See [`Cart::set_quantity`].
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        let result = self.cart.set_quantity(product_id, quantity);
        if let Ok(changed) = &result {
            debug!(product_id = %product_id, quantity, changed = *changed, "cart quantity set");
        }
        result
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    /// Snapshot the cart for persistence.
    pub fn to_snapshot(&self) -> CartSnapshot {
        self.cart.to_snapshot()
    }

    /// Restore the cart from a persisted snapshot.
    ///
    /// An invalid snapshot leaves the current cart untouched.
    pub fn restore(&mut self, snapshot: CartSnapshot) -> Result<(), CommerceError> {
        match Cart::from_snapshot(snapshot) {
            Ok(cart) => {
                debug!(items = cart.unique_item_count(), "cart restored from snapshot");
                self.cart = cart;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "cart snapshot rejected");
                Err(e)
            }
        }
    }
}
