//! Product list filters.

use crate::catalog::ProductSummary;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Availability {
    /// Show everything.
    #[default]
    All,
    /// Only products with stock.
    InStock,
    /// Only products without stock.
    OutOfStock,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStock => "in_stock",
            Availability::OutOfStock => "out_of_stock",
        }
    }
}

/// The filter set the shop page applies to the product list.
///
/// All active criteria must match (AND); an empty criterion matches
/// everything. The backend applies the same filters server-side; matching
/// locally keeps the visible list consistent between fetches.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductFilters {
    /// Categories to include (OR within the set; empty = all).
    pub categories: Vec<CategoryId>,
    /// Inclusive minimum unit price.
    pub price_min: Option<Money>,
    /// Inclusive maximum unit price.
    pub price_max: Option<Money>,
    /// Stock availability.
    pub availability: Availability,
    /// Case-insensitive substring match on the product name.
    pub search: String,
}

impl ProductFilters {
    /// Create an empty filter set that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a product passes every active filter.
    pub fn matches(&self, product: &ProductSummary) -> bool {
        if !self.categories.is_empty() {
            match &product.category {
                Some(cat) if self.categories.contains(cat) => {}
                _ => return false,
            }
        }
        if let Some(min) = self.price_min {
            if product.unit_price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.unit_price.amount_cents > max.amount_cents {
                return false;
            }
        }
        match self.availability {
            Availability::All => {}
            Availability::InStock => {
                if !product.in_stock() {
                    return false;
                }
            }
            Availability::OutOfStock => {
                if product.in_stock() {
                    return false;
                }
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Check if any filter is active.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
