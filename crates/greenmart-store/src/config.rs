//! Store configuration.

use greenmart_commerce::money::Currency;
use serde::{Deserialize, Serialize};

/// Configuration injected at [`Store`](crate::Store) construction.
///
/// No values are read from the environment; the embedding application
/// decides these and passes them in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Currency for the cart and all displayed prices.
    pub currency: Currency,
    /// Products per page on the shop listing.
    pub products_per_page: i64,
    /// Orders per page in the admin order list.
    pub orders_per_page: i64,
    /// Products per page in the admin product list.
    pub admin_products_per_page: i64,
    /// How many recent orders the dashboard shows.
    pub recent_orders_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            products_per_page: 12,
            orders_per_page: 10,
            admin_products_per_page: 10,
            recent_orders_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_page_sizes() {
        let config = StoreConfig::default();
        assert_eq!(config.products_per_page, 12);
        assert_eq!(config.orders_per_page, 10);
        assert_eq!(config.admin_products_per_page, 10);
        assert_eq!(config.currency, Currency::USD);
    }
}
