//! Client-side state container for the GreenMart storefront and admin console.
//!
//! The [`Store`] owns one slice of state per feature area (cart, products,
//! product admin, wishlist, orders, couriers, dashboard). It is constructed explicitly and
//! passed by reference to consumers; there is no ambient global. Slices are
//! caches of backend truth, populated by the caller after each fetch; the
//! cart is the exception and is owned entirely by the client.
//!
//! All mutations run as discrete, synchronous operations. Callers that could
//! race (e.g., overlapping network callbacks) should go through
//! [`SharedStore`], which serializes access behind a mutex.
//!
//! # Example
//!
//! ```rust
//! use greenmart_store::prelude::*;
//!
//! let mut store = Store::new(StoreConfig::default());
//! store
//!     .cart
//!     .add_item(
//!         ProductId::new("p1"),
//!         "Tomato",
//!         Money::new(599, Currency::USD),
//!         None,
//!         2,
//!     )
//!     .unwrap();
//! assert_eq!(store.cart.badge_count(), 2);
//! ```

pub mod config;
pub mod remote;
pub mod slices;
pub mod store;

pub use config::StoreConfig;
pub use remote::RemoteStatus;
pub use store::{SharedStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::remote::RemoteStatus;
    pub use crate::slices::{
        CartSlice, CouriersSlice, DashboardSlice, OrdersSlice, ProductAdminSlice, ProductsSlice,
        WishlistSlice,
    };
    pub use crate::store::{SharedStore, Store};

    pub use greenmart_commerce::prelude::*;
}
