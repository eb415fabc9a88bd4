//! Cart persistence snapshot.
//!
//! The storefront may stash the cart in local storage across page reloads.
//! A snapshot loaded back from storage is untrusted: it is re-validated
//! against the cart invariants before a `Cart` is built from it.

use crate::cart::cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serialized form of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Cart currency.
    pub currency: Currency,
    /// Line items.
    pub items: Vec<LineItem>,
    /// Stored total quantity, checked against the recomputed sum on load.
    pub total_quantity: i64,
    /// Stored total price, checked against the recomputed sum on load.
    pub total_price: Money,
}

impl CartSnapshot {
    /// Serialize to a JSON string for storage.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string. Invariants are checked by
    /// [`Cart::from_snapshot`], not here.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Cart {
    /// Capture the cart as a snapshot.
    pub fn to_snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            currency: self.currency(),
            items: self.items().to_vec(),
            total_quantity: self.total_quantity(),
            total_price: self.total_price(),
        }
    }

    /// Rebuild a cart from a snapshot, re-validating all invariants.
    ///
    /// Rejected snapshots: duplicate product IDs, non-positive or
    /// over-cap quantities, negative prices, currency mismatches, and
    /// stored totals that disagree with the recomputed sums.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Result<Cart, CommerceError> {
        let mut seen = HashSet::new();
        for item in &snapshot.items {
            if !seen.insert(item.product_id.clone()) {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "duplicate product id {}",
                    item.product_id
                )));
            }
            if item.quantity < 1 || item.quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "quantity {} out of range for {}",
                    item.quantity, item.product_id
                )));
            }
            if item.unit_price.is_negative() {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "negative unit price for {}",
                    item.product_id
                )));
            }
            if item.unit_price.currency != snapshot.currency {
                return Err(CommerceError::InvalidSnapshot(format!(
                    "currency mismatch on {}",
                    item.product_id
                )));
            }
        }

        let mut cart = Cart::from_validated_parts(snapshot.currency, snapshot.items);
        cart.recompute()?;

        if cart.total_quantity() != snapshot.total_quantity
            || cart.total_price() != snapshot.total_price
        {
            return Err(CommerceError::InvalidSnapshot(
                "stored totals disagree with recomputed sums".to_string(),
            ));
        }
        Ok(cart)
    }
}
