//! Admin dashboard stats.

use crate::catalog::ProductSummary;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Headline figures shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    /// Number of products in the catalog.
    pub total_products: i64,
    /// Number of orders ever placed.
    pub total_orders: i64,
    /// Revenue across non-cancelled orders.
    pub total_revenue: Money,
    /// Orders still pending.
    pub pending_orders: i64,
    /// Users active in the reporting window, as reported by the backend.
    pub active_users: i64,
}

impl DashboardStats {
    /// Empty stats in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            total_products: 0,
            total_orders: 0,
            total_revenue: Money::zero(currency),
            pending_orders: 0,
            active_users: 0,
        }
    }

    /// Derive stats from the mirrored catalog and order data.
    ///
    /// Cancelled orders count toward the order total but not revenue.
    /// `active_users` has no client-side source, so it is passed through.
    pub fn compute(
        products: &[ProductSummary],
        orders: &[Order],
        active_users: i64,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let revenue_sources: Vec<&Money> = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| &o.total)
            .collect();
        let total_revenue = Money::try_sum(revenue_sources.into_iter(), currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            total_products: products.len() as i64,
            total_orders: orders.len() as i64,
            total_revenue,
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count() as i64,
            active_users,
        })
    }
}

/// Most recently placed orders, newest first.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OrderId, ProductId};
    use crate::order::Address;

    fn order(id: &str, cents: i64, status: OrderStatus, created_at: i64) -> Order {
        Order {
            id: OrderId::new(id),
            order_number: format!("GM-{}", id),
            customer_id: None,
            customer_name: "A. Shopper".to_string(),
            email: "shopper@example.com".to_string(),
            phone: None,
            items: Vec::new(),
            total: Money::new(cents, Currency::USD),
            status,
            shipping_address: Address::default(),
            courier_id: None,
            tracking_number: None,
            created_at,
            updated_at: created_at,
        }
    }

    fn product(id: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(id),
            name: id.to_string(),
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
    fn test_compute_excludes_cancelled_revenue() {
        let products = vec![product("p1"), product("p2")];
        let orders = vec![
            order("1", 1000, OrderStatus::Pending, 10),
            order("2", 2000, OrderStatus::Delivered, 20),
            order("3", 5000, OrderStatus::Cancelled, 30),
        ];

        let stats = DashboardStats::compute(&products, &orders, 7, Currency::USD).unwrap();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue, Money::new(3000, Currency::USD));
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.active_users, 7);
    }

    #[test]
    fn test_compute_on_empty_data() {
        let stats = DashboardStats::compute(&[], &[], 0, Currency::USD).unwrap();
        assert_eq!(stats, DashboardStats::empty(Currency::USD));
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let orders = vec![
            order("1", 1000, OrderStatus::Pending, 10),
            order("2", 2000, OrderStatus::Pending, 30),
            order("3", 3000, OrderStatus::Pending, 20),
        ];
        let recent = recent_orders(&orders, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, OrderId::new("2"));
        assert_eq!(recent[1].id, OrderId::new("3"));
    }
}
