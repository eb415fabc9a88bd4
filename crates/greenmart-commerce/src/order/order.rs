//! Order types.

use crate::error::CommerceError;
use crate::ids::{CourierId, CustomerId, OrderId, ProductId};
use crate::money::Money;
use crate::order::Courier;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order handed to a courier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    /// Check whether a transition to `next` is allowed.
    ///
    /// Orders move forward through Pending -> Processing -> Shipped ->
    /// Delivered; cancellation is allowed until the order ships.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// One product line on a placed order, copied from the cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl OrderLineItem {
    /// Line subtotal. `None` on overflow.
    pub fn subtotal(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// An order as mirrored from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer account (None for guest checkout).
    pub customer_id: Option<CustomerId>,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub phone: Option<String>,
    /// Items ordered.
    pub items: Vec<OrderLineItem>,
    /// Order total at placement time.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Shipping address.
    pub shipping_address: Address,
    /// Assigned courier, once shipped.
    pub courier_id: Option<CourierId>,
    /// Courier tracking number, once shipped.
    pub tracking_number: Option<String>,
    /// Unix timestamp of placement.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Move the order to a new status, enforcing the transition rules.
    pub fn update_status(&mut self, next: OrderStatus) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(next) {
            return Err(CommerceError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Hand the order to a courier.
    ///
    /// Records the courier and tracking number on the order, moves its
    /// status to Shipped, and adds the order to the courier's load. Fails
    /// if the order cannot ship from its current status or the courier
    /// cannot take more orders; neither side is modified on failure.
    pub fn assign_courier(
        &mut self,
        courier: &mut Courier,
        tracking_number: impl Into<String>,
    ) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(OrderStatus::Shipped) {
            return Err(CommerceError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: OrderStatus::Shipped.as_str().to_string(),
            });
        }
        courier.assign(self.id.clone())?;
        self.courier_id = Some(courier.id.clone());
        self.tracking_number = Some(tracking_number.into());
        self.status = OrderStatus::Shipped;
        self.updated_at = current_timestamp();
        Ok(())
    }
}

/// Current Unix timestamp in seconds.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
