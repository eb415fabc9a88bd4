//! Shopping cart module.
//!
//! The cart is the one piece of state the client fully owns. It is mutated
//! only through the four operations on [`Cart`]; the derived totals are
//! recomputed from the line items after every mutation and never drift.

mod cart;
mod snapshot;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use snapshot::CartSnapshot;
