//! Cart and line item types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// One row in the cart: a single product and its requested quantity.
///
/// `name`, `image_ref`, and `unit_price` are copies captured when the item
/// was first added; they are not a live join against the catalog and may go
/// stale if the product changes later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased; unique within the cart.
    pub product_id: ProductId,
    /// Product name, captured at add time.
    pub name: String,
    /// Product image reference, captured at add time.
    pub image_ref: Option<String>,
    /// Unit price, captured at add time.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Line subtotal (`unit_price * quantity`). `None` on overflow.
    pub fn subtotal(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// A shopping cart.
///
/// Fields are private so consumers cannot bypass the mutation operations;
/// every mutation leaves these invariants holding:
///
/// - no two items share a `product_id`
/// - every item has `quantity >= 1`
/// - `total_quantity` and `total_price` equal the recomputed sums over items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    currency: Currency,
    items: Vec<LineItem>,
    total_quantity: i64,
    total_price: Money,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
            total_quantity: 0,
            total_price: Money::zero(currency),
        }
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all quantities across items.
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Sum of `unit_price * quantity` across items.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Total item count, the figure the cart badge shows.
    /// Always equals [`total_quantity`](Self::total_quantity).
    pub fn item_count(&self) -> i64 {
        self.total_quantity
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get_item(product_id).is_some()
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity is incremented and the
    /// stored display fields are kept (first write wins; the new call's
    /// `name`, `unit_price`, and `image_ref` are ignored). Otherwise a new
    /// line item is appended.
    ///
    /// Returns an error, leaving the cart unchanged, if:
    /// - `quantity` is not positive
    /// - `unit_price` is negative or in a different currency than the cart
    /// - the merged quantity would exceed [`MAX_QUANTITY_PER_ITEM`]
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: Option<String>,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::NegativePrice(unit_price.amount_cents));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return self.recompute_totals();
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            product_id,
            name: name.into(),
            image_ref,
            unit_price,
            quantity,
        });
        self.recompute_totals()
    }

    /// Remove a product from the cart.
    ///
    /// Removing an absent product is a no-op returning `false`, so the
    /// operation is idempotent.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            // Sums only shrink on removal; recompute cannot overflow.
            let _ = self.recompute_totals();
        }
        removed
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the item. Setting the quantity of
    /// an absent product is a no-op returning `Ok(false)`; this operation is
    /// update-only, never an insert.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                self.recompute_totals()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear all items and reset both totals to zero. Unconditional.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_quantity = 0;
        self.total_price = Money::zero(self.currency);
    }

    /// Recompute both derived totals by full reduction over the items.
    ///
    /// Deliberately O(n) per mutation rather than incremental: the totals
    /// can never drift from the items they summarize.
    fn recompute_totals(&mut self) -> Result<(), CommerceError> {
        let mut quantity: i64 = 0;
        let mut price = Money::zero(self.currency);
        for item in &self.items {
            quantity = quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            let subtotal = item.subtotal().ok_or(CommerceError::Overflow)?;
            price = price.try_add(&subtotal).ok_or(CommerceError::Overflow)?;
        }
        self.total_quantity = quantity;
        self.total_price = price;
        Ok(())
    }

    pub(crate) fn from_validated_parts(currency: Currency, items: Vec<LineItem>) -> Self {
        let mut cart = Self::new(currency);
        cart.items = items;
        cart
    }

    pub(crate) fn recompute(&mut self) -> Result<(), CommerceError> {
        self.recompute_totals()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn add(cart: &mut Cart, id: &str, cents: i64, qty: i64) {
        cart.add_item(ProductId::new(id), id.to_string(), usd(cents), None, qty)
            .unwrap();
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), usd(0));
    }

    #[test]
    fn test_add_item_appends_and_totals() {
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);
        add(&mut cart, "p2", 1000, 1);

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.item_count(), cart.total_quantity());
        assert_eq!(cart.total_price(), usd(2198));
    }

    #[test]
    fn test_repeat_add_merges_quantity() {
        // Scenario: add p1 qty 1 then qty 2 -> one line, qty 3, $17.97.
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 1);
        add(&mut cart, "p1", 599, 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get_item(&ProductId::new("p1")).unwrap().quantity, 3);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), usd(1797));
    }

    #[test]
    fn test_repeat_add_keeps_first_display_fields() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(
            ProductId::new("p1"),
            "Tomato",
            usd(599),
            Some("img1".to_string()),
            1,
        )
        .unwrap();
        // Second add supplies different name/price/image; first write wins.
        cart.add_item(
            ProductId::new("p1"),
            "Heirloom Tomato",
            usd(899),
            Some("img2".to_string()),
            1,
        )
        .unwrap();

        let item = cart.get_item(&ProductId::new("p1")).unwrap();
        assert_eq!(item.name, "Tomato");
        assert_eq!(item.unit_price, usd(599));
        assert_eq!(item.image_ref.as_deref(), Some("img1"));
        // Totals use the stored unit price, not the ignored one.
        assert_eq!(cart.total_price(), usd(1198));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new(Currency::USD);
        for qty in [0, -3] {
            let err = cart
                .add_item(ProductId::new("p1"), "Tomato", usd(599), None, qty)
                .unwrap_err();
            assert!(matches!(err, CommerceError::InvalidQuantity(q) if q == qty));
        }
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut cart = Cart::new(Currency::USD);
        let err = cart
            .add_item(ProductId::new("p1"), "Tomato", usd(-1), None, 1)
            .unwrap_err();
        assert!(matches!(err, CommerceError::NegativePrice(-1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let err = cart
            .add_item(
                ProductId::new("p1"),
                "Tomato",
                Money::new(599, Currency::EUR),
                None,
                1,
            )
            .unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_add_enforces_quantity_cap() {
        let mut cart = Cart::new(Currency::USD);
        let err = cart
            .add_item(
                ProductId::new("p1"),
                "Tomato",
                usd(599),
                None,
                MAX_QUANTITY_PER_ITEM + 1,
            )
            .unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(_, _)));

        add(&mut cart, "p1", 599, MAX_QUANTITY_PER_ITEM);
        let err = cart
            .add_item(ProductId::new("p1"), "Tomato", usd(599), None, 1)
            .unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(_, _)));
        assert_eq!(cart.total_quantity(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_remove_item() {
        // Scenario: p1 qty 2, p2 $10 qty 1, remove p1 -> only p2, total $10.
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);
        add(&mut cart, "p2", 1000, 1);

        assert!(cart.remove_item(&ProductId::new("p1")));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price(), usd(1000));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);

        assert!(cart.remove_item(&ProductId::new("p1")));
        let after_first = cart.clone();
        assert!(!cart.remove_item(&ProductId::new("p1")));
        assert_eq!(cart, after_first);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);

        assert!(cart.set_quantity(&ProductId::new("p1"), 5).unwrap());
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.total_price(), usd(2995));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        // Scenario: add p1 qty 2, set quantity 0 -> empty cart, zero totals.
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);

        assert!(cart.set_quantity(&ProductId::new("p1"), 0).unwrap());
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), usd(0));
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        // Scenario: setQuantity("p9", 5) on an empty cart -> no-op.
        let mut cart = Cart::new(Currency::USD);
        assert!(!cart.set_quantity(&ProductId::new("p9"), 5).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 1);
        add(&mut cart, "p2", 1000, 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), usd(0));
    }

    #[test]
    fn test_totals_track_items_through_mixed_operations() {
        let mut cart = Cart::new(Currency::USD);
        add(&mut cart, "p1", 599, 2);
        add(&mut cart, "p2", 250, 4);
        cart.set_quantity(&ProductId::new("p2"), 1).unwrap();
        cart.remove_item(&ProductId::new("p1"));
        add(&mut cart, "p3", 125, 3);

        let expected_qty: i64 = cart.items().iter().map(|i| i.quantity).sum();
        let expected_price = Money::try_sum(
            cart.items()
                .iter()
                .map(|i| i.subtotal().unwrap())
                .collect::<Vec<_>>()
                .iter(),
            Currency::USD,
        )
        .unwrap();
        assert_eq!(cart.total_quantity(), expected_qty);
        assert_eq!(cart.total_price(), expected_price);
    }
}
