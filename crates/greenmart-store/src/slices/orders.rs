//! Orders slice: the admin console's order list and detail view.

use crate::remote::RemoteStatus;
use greenmart_commerce::catalog::Pagination;
use greenmart_commerce::error::CommerceError;
use greenmart_commerce::ids::OrderId;
use greenmart_commerce::order::{Courier, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State behind the admin order list and the order detail modal.
///
/// `current` is the order open in the detail view; status updates are
/// applied to both the list entry and `current` so the two never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrdersSlice {
    /// Orders on the current page.
    pub orders: Vec<Order>,
    /// The order open in the detail view.
    pub current: Option<Order>,
    /// Status filter (`None` = all).
    pub status_filter: Option<OrderStatus>,
    /// Pagination state.
    pub pagination: Pagination,
    /// Fetch status.
    pub status: RemoteStatus,
}

impl OrdersSlice {
    /// Create an empty slice with the given page size.
    pub fn new(per_page: i64) -> Self {
        Self {
            orders: Vec::new(),
            current: None,
            status_filter: None,
            pagination: Pagination::new(per_page),
            status: RemoteStatus::Idle,
        }
    }

    /// A fetch was kicked off.
    pub fn fetch_started(&mut self) {
        self.status = RemoteStatus::Loading;
    }

    /// A fetch returned a page of orders and the filtered total.
    pub fn fetch_loaded(&mut self, orders: Vec<Order>, total: i64) {
        debug!(count = orders.len(), total, "order list loaded");
        self.orders = orders;
        self.pagination.set_total(total);
        self.status = RemoteStatus::Idle;
    }

    /// A fetch failed.
    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.status = RemoteStatus::Failed(error.into());
    }

    /// Append a freshly placed order (confirmed checkout).
    pub fn insert(&mut self, order: Order) {
        self.pagination.set_total(self.pagination.total + 1);
        self.orders.push(order);
    }

    /// Look up an order in the list.
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    /// Open an order in the detail view.
    pub fn set_current(&mut self, order: Option<Order>) {
        self.current = order;
    }

    /// Replace the status filter. Resets to page 1.
    pub fn set_status_filter(&mut self, filter: Option<OrderStatus>) {
        self.status_filter = filter;
        self.pagination.reset();
    }

    /// Navigate to a page (clamped to the valid range).
    pub fn set_page(&mut self, page: i64) {
        self.pagination.set_page(page);
    }

    /// Orders in the list passing the status filter.
    pub fn filtered(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| self.status_filter.map_or(true, |s| o.status == s))
            .collect()
    }

    /// Move an order to a new status, in the list and the detail view.
    pub fn update_status(
        &mut self,
        order_id: &OrderId,
        next: OrderStatus,
    ) -> Result<(), CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or_else(|| CommerceError::OrderNotFound(order_id.to_string()))?;
        order.update_status(next)?;
        debug!(order_id = %order_id, status = next.as_str(), "order status updated");

        if let Some(current) = self.current.as_mut() {
            if &current.id == order_id {
                current.status = next;
                current.updated_at = order.updated_at;
            }
        }
        Ok(())
    }

    /// Assign a courier to an order, shipping it.
    ///
    /// Applies the same change to the detail view if it shows this order.
    pub fn assign_courier(
        &mut self,
        order_id: &OrderId,
        courier: &mut Courier,
        tracking_number: impl Into<String>,
    ) -> Result<(), CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or_else(|| CommerceError::OrderNotFound(order_id.to_string()))?;
        let tracking = tracking_number.into();
        if let Err(e) = order.assign_courier(courier, tracking.clone()) {
            warn!(order_id = %order_id, courier_id = %courier.id, error = %e, "courier assignment rejected");
            return Err(e);
        }
        debug!(order_id = %order_id, courier_id = %courier.id, "courier assigned");

        if let Some(current) = self.current.as_mut() {
            if &current.id == order_id {
                current.courier_id = Some(courier.id.clone());
                current.tracking_number = Some(tracking);
                current.status = OrderStatus::Shipped;
                current.updated_at = order.updated_at;
            }
        }
        Ok(())
    }
}
