//! Orders module.
//!
//! Order records mirrored from the backend, status transitions, courier
//! assignment, and the checkout draft built from a cart.

mod courier;
mod draft;
mod order;

pub use courier::Courier;
pub use draft::{CustomerInfo, OrderDraft};
pub use order::{Address, Order, OrderLineItem, OrderStatus};
