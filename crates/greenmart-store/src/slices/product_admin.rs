//! Product admin slice: the admin console's catalog management page.

use crate::remote::RemoteStatus;
use greenmart_commerce::catalog::{Pagination, ProductSummary};
use greenmart_commerce::ids::ProductId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State behind the admin product list and the add/edit product form.
///
/// Separate from the storefront listing: this mirror is unfiltered, pages
/// at the admin page size, and tracks the product open in the editor.
/// Creates, updates, and deletes are recorded here after the backend
/// confirms them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAdminSlice {
    /// Products on the current page.
    pub products: Vec<ProductSummary>,
    /// The product open in the editor.
    pub current: Option<ProductSummary>,
    /// Pagination state.
    pub pagination: Pagination,
    /// Fetch status.
    pub status: RemoteStatus,
}

impl ProductAdminSlice {
    /// Create an empty slice with the given page size.
    pub fn new(per_page: i64) -> Self {
        Self {
            products: Vec::new(),
            current: None,
            pagination: Pagination::new(per_page),
            status: RemoteStatus::Idle,
        }
    }

    /// A fetch was kicked off.
    pub fn fetch_started(&mut self) {
        self.status = RemoteStatus::Loading;
    }

    /// A fetch returned a page of products and the catalog total.
    pub fn fetch_loaded(&mut self, products: Vec<ProductSummary>, total: i64) {
        debug!(count = products.len(), total, "admin product list loaded");
        self.products = products;
        self.pagination.set_total(total);
        self.status = RemoteStatus::Idle;
    }

    /// A fetch failed.
    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.status = RemoteStatus::Failed(error.into());
    }

    /// Record a product the backend confirmed, replacing any existing entry
    /// with the same ID (covers both create and update).
    pub fn upsert(&mut self, product: ProductSummary) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                debug!(product_id = %product.id, "product updated");
                *existing = product;
            }
            None => {
                debug!(product_id = %product.id, "product created");
                self.pagination.set_total(self.pagination.total + 1);
                self.products.push(product);
            }
        }
    }

    /// Record a confirmed deletion. Idempotent; absent IDs return `false`.
    ///
    /// Also closes the editor if it was showing the deleted product.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.products.len();
        self.products.retain(|p| &p.id != product_id);
        let removed = self.products.len() < len_before;
        if removed {
            debug!(product_id = %product_id, "product deleted");
            self.pagination.set_total(self.pagination.total - 1);
            if self
                .current
                .as_ref()
                .map_or(false, |c| &c.id == product_id)
            {
                self.current = None;
            }
        }
        removed
    }

    /// Look up a product in the list.
    pub fn get(&self, product_id: &ProductId) -> Option<&ProductSummary> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Open a product in the editor.
    pub fn set_current(&mut self, product: Option<ProductSummary>) {
        self.current = product;
    }

    /// Navigate to a page (clamped to the valid range).
    pub fn set_page(&mut self, page: i64) {
        self.pagination.set_page(page);
    }
}
