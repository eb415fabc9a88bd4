//! Catalog module.
//!
//! Product summaries as fetched from the backend, plus the list filters and
//! pagination the shop page applies to them.

mod filter;
mod pagination;
mod product;

pub use filter::{Availability, ProductFilters};
pub use pagination::Pagination;
pub use product::ProductSummary;
