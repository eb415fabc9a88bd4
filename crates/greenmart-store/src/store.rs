//! The store: one owned state object for the whole application.

use crate::config::StoreConfig;
use crate::slices::{
    CartSlice, CouriersSlice, DashboardSlice, OrdersSlice, ProductAdminSlice, ProductsSlice,
    WishlistSlice,
};
use greenmart_commerce::error::CommerceError;
use greenmart_commerce::ids::{CourierId, OrderId};
use greenmart_commerce::order::{Address, CustomerInfo, OrderDraft};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Centralized application state.
///
/// Constructed explicitly and passed by reference to consumers; there is no
/// global instance. Each feature area lives in its own slice; the only
/// cross-slice operations are [`place_order`](Store::place_order) and
/// [`assign_courier`](Store::assign_courier).
#[derive(Debug)]
pub struct Store {
    pub config: StoreConfig,
    pub cart: CartSlice,
    pub products: ProductsSlice,
    pub product_admin: ProductAdminSlice,
    pub wishlist: WishlistSlice,
    pub orders: OrdersSlice,
    pub couriers: CouriersSlice,
    pub dashboard: DashboardSlice,
}

impl Store {
    /// Create a store with empty slices.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            cart: CartSlice::new(config.currency),
            products: ProductsSlice::new(config.products_per_page),
            product_admin: ProductAdminSlice::new(config.admin_products_per_page),
            wishlist: WishlistSlice::new(),
            orders: OrdersSlice::new(config.orders_per_page),
            couriers: CouriersSlice::new(),
            dashboard: DashboardSlice::new(config.currency, config.recent_orders_limit),
            config,
        }
    }

    /// Place an order from the current cart.
    ///
    /// Builds the submission draft, records the confirmed order in the
    /// orders slice, and clears the cart. The cart is untouched if the
    /// draft cannot be built.
    ///
    /// In the full flow the draft goes to the order-creation API between
    /// those two steps; transport is the caller's concern, so this models
    /// the confirmed-placement path.
    pub fn place_order(
        &mut self,
        customer: CustomerInfo,
        shipping_address: Address,
    ) -> Result<OrderId, CommerceError> {
        let draft = OrderDraft::from_cart(self.cart.cart(), customer, shipping_address)?;

        let id = OrderId::generate();
        let order_number = format!("GM-{}", id.as_str());
        let order = draft.into_order(id.clone(), order_number);
        info!(order_id = %id, total = %order.total, "order placed");

        self.orders.insert(order);
        self.cart.clear();
        Ok(id)
    }

    /// Assign a courier from the roster to an order.
    pub fn assign_courier(
        &mut self,
        order_id: &OrderId,
        courier_id: &CourierId,
        tracking_number: impl Into<String>,
    ) -> Result<(), CommerceError> {
        let courier = self
            .couriers
            .get_mut(courier_id)
            .ok_or_else(|| CommerceError::CourierNotFound(courier_id.to_string()))?;
        self.orders
            .assign_courier(order_id, courier, tracking_number)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

/// A store behind a mutex, for callers whose mutations could interleave.
///
/// Each closure passed to [`with`](SharedStore::with) or
/// [`update`](SharedStore::update) runs as one atomic operation; the mutex
/// is the single-writer serialization point, so slice invariants hold at
/// every observable moment. A poisoned lock is recovered rather than
/// propagated: every mutation completes or leaves state unchanged, so the
/// data is still consistent after a panicking reader.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Create a shared store with empty slices.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Store::new(config))),
        }
    }

    /// Run a read-only closure against the store.
    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    /// Run a mutating closure against the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmart_commerce::ids::ProductId;
    use greenmart_commerce::money::{Currency, Money};

    fn add_tomatoes(store: &mut Store) {
        store
            .cart
            .add_item(
                ProductId::new("p1"),
                "Tomato",
                Money::new(599, Currency::USD),
                None,
                2,
            )
            .unwrap();
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            customer_id: None,
            name: "A. Shopper".to_string(),
            email: "shopper@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut store = Store::new(StoreConfig::default());
        add_tomatoes(&mut store);

        let order_id = store.place_order(customer(), Address::default()).unwrap();
        assert_eq!(store.cart.badge_count(), 0);

        let order = store.orders.get(&order_id).unwrap();
        assert_eq!(order.total, Money::new(1198, Currency::USD));
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_place_order_empty_cart_leaves_orders_untouched() {
        let mut store = Store::new(StoreConfig::default());
        let err = store.place_order(customer(), Address::default()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
        assert!(store.orders.orders.is_empty());
    }

    #[test]
    fn test_assign_courier_unknown_courier() {
        let mut store = Store::new(StoreConfig::default());
        let err = store
            .assign_courier(&OrderId::new("ord-1"), &CourierId::new("missing"), "TRK-1")
            .unwrap_err();
        assert!(matches!(err, CommerceError::CourierNotFound(_)));
    }

    #[test]
    fn test_shared_store_serializes_mutations() {
        let shared = SharedStore::new(StoreConfig::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        shared.update(|store| {
                            store
                                .cart
                                .add_item(
                                    ProductId::new("p1"),
                                    "Tomato",
                                    Money::new(599, Currency::USD),
                                    None,
                                    1,
                                )
                                .unwrap();
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        shared.with(|store| {
            assert_eq!(store.cart.badge_count(), 100);
            assert_eq!(
                store.cart.badge_total(),
                Money::new(59_900, Currency::USD)
            );
        });
    }
}
