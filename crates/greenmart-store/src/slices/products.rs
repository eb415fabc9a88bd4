//! Products slice: the shop page's list, filters, and pagination.

use crate::remote::RemoteStatus;
use greenmart_commerce::catalog::{Availability, Pagination, ProductFilters, ProductSummary};
use greenmart_commerce::ids::{CategoryId, ProductId};
use greenmart_commerce::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State behind the product listing page.
///
/// `items` holds the page of products most recently fetched for the current
/// filters; changing any filter jumps back to page 1, as the listing UI
/// expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsSlice {
    /// Products on the current page.
    pub items: Vec<ProductSummary>,
    /// Active filters.
    pub filters: ProductFilters,
    /// Pagination state.
    pub pagination: Pagination,
    /// Fetch status.
    pub status: RemoteStatus,
}

impl ProductsSlice {
    /// Create an empty slice with the given page size.
    pub fn new(per_page: i64) -> Self {
        Self {
            items: Vec::new(),
            filters: ProductFilters::new(),
            pagination: Pagination::new(per_page),
            status: RemoteStatus::Idle,
        }
    }

    /// A fetch was kicked off.
    pub fn fetch_started(&mut self) {
        self.status = RemoteStatus::Loading;
    }

    /// A fetch returned a page of products and the filtered total.
    pub fn fetch_loaded(&mut self, items: Vec<ProductSummary>, total: i64) {
        debug!(count = items.len(), total, "product list loaded");
        self.items = items;
        self.pagination.set_total(total);
        self.status = RemoteStatus::Idle;
    }

    /// A fetch failed.
    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.status = RemoteStatus::Failed(error.into());
    }

    /// Look up a fetched product, e.g. to copy display fields on add-to-cart.
    pub fn get(&self, product_id: &ProductId) -> Option<&ProductSummary> {
        self.items.iter().find(|p| &p.id == product_id)
    }

    /// Products on the current page that pass the active filters.
    pub fn filtered(&self) -> Vec<&ProductSummary> {
        self.items
            .iter()
            .filter(|p| self.filters.matches(p))
            .collect()
    }

    /// Replace the category filter. Resets to page 1.
    pub fn set_categories(&mut self, categories: Vec<CategoryId>) {
        self.filters.categories = categories;
        self.pagination.reset();
    }

    /// Replace the price range filter. Resets to page 1.
    pub fn set_price_range(&mut self, min: Option<Money>, max: Option<Money>) {
        self.filters.price_min = min;
        self.filters.price_max = max;
        self.pagination.reset();
    }

    /// Replace the availability filter. Resets to page 1.
    pub fn set_availability(&mut self, availability: Availability) {
        self.filters.availability = availability;
        self.pagination.reset();
    }

    /// Replace the search text. Resets to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.pagination.reset();
    }

    /// Drop all filters. Resets to page 1.
    pub fn reset_filters(&mut self) {
        self.filters = ProductFilters::new();
        self.pagination.reset();
    }

    /// Navigate to a page (clamped to the valid range).
    pub fn set_page(&mut self, page: i64) {
        self.pagination.set_page(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmart_commerce::money::Currency;

    fn product(id: &str, name: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(id),
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            description: None,
            unit_price: Money::new(599, Currency::USD),
            stock: 3,
            category: None,
            image_ref: None,
            is_active: true,
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut slice = ProductsSlice::new(12);
        slice.fetch_started();
        assert!(slice.status.is_loading());

        slice.fetch_loaded(vec![product("p1", "Tomato")], 30);
        assert_eq!(slice.status, RemoteStatus::Idle);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.pagination.total_pages(), 3);
    }

    #[test]
    fn test_fetch_failed_keeps_stale_items() {
        let mut slice = ProductsSlice::new(12);
        slice.fetch_loaded(vec![product("p1", "Tomato")], 1);
        slice.fetch_started();
        slice.fetch_failed("network down");

        assert_eq!(slice.status.error(), Some("network down"));
        assert_eq!(slice.items.len(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut slice = ProductsSlice::new(10);
        slice.fetch_loaded(Vec::new(), 50);
        slice.set_page(4);
        assert_eq!(slice.pagination.page, 4);

        slice.set_search("tomato");
        assert_eq!(slice.pagination.page, 1);

        slice.set_page(3);
        slice.set_availability(Availability::InStock);
        assert_eq!(slice.pagination.page, 1);
    }

    #[test]
    fn test_filtered_applies_search() {
        let mut slice = ProductsSlice::new(12);
        slice.fetch_loaded(vec![product("p1", "Tomato"), product("p2", "Basil")], 2);
        slice.set_search("tom");

        let visible = slice.filtered();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Tomato");
    }

    #[test]
    fn test_reset_filters() {
        let mut slice = ProductsSlice::new(12);
        slice.set_search("tomato");
        slice.set_categories(vec![CategoryId::new("veg")]);
        slice.reset_filters();
        assert!(slice.filters.is_empty());
    }
}
