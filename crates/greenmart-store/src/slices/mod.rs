//! Per-feature state slices.
//!
//! Each slice owns one feature area's state and exposes the mutations the
//! UI needs. Slices never fetch; the caller performs the HTTP request and
//! feeds the result into `fetch_loaded` / `fetch_failed`.

mod cart;
mod couriers;
mod dashboard;
mod orders;
mod product_admin;
mod products;
mod wishlist;

pub use cart::CartSlice;
pub use couriers::CouriersSlice;
pub use dashboard::DashboardSlice;
pub use orders::OrdersSlice;
pub use product_admin::ProductAdminSlice;
pub use products::ProductsSlice;
pub use wishlist::WishlistSlice;
