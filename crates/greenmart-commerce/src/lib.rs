//! E-commerce domain types and logic for GreenMart.
//!
//! This crate provides the client-side domain model for a grocery storefront:
//!
//! - **Cart**: shopping cart with line items and derived totals
//! - **Catalog**: product summaries, list filters, pagination
//! - **Order**: orders, status transitions, courier assignment, checkout drafts
//! - **Wishlist**: saved products
//! - **Dashboard**: admin stats derived from catalog and order data
//!
//! All collections here mirror backend state; the backend remains the source
//! of truth. The cart is the exception: it is owned entirely by the client
//! and mutated only through its four operations.
//!
//! # Example
//!
//! ```rust
//! use greenmart_commerce::prelude::*;
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add_item(
//!     ProductId::new("prod-1"),
//!     "Tomato",
//!     Money::new(599, Currency::USD),
//!     Some("img/tomato.png".to_string()),
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total_price(), Money::new(1797, Currency::USD));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod order;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartSnapshot, LineItem, MAX_QUANTITY_PER_ITEM};

    // Catalog
    pub use crate::catalog::{Availability, Pagination, ProductFilters, ProductSummary};

    // Orders
    pub use crate::order::{
        Address, Courier, CustomerInfo, Order, OrderDraft, OrderLineItem, OrderStatus,
    };

    // Wishlist
    pub use crate::wishlist::Wishlist;

    // Dashboard
    pub use crate::dashboard::DashboardStats;
}
