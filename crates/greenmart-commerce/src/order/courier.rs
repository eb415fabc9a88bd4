//! Courier types.

use crate::error::CommerceError;
use crate::ids::{CourierId, OrderId};
use serde::{Deserialize, Serialize};

/// A delivery courier managed from the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Courier {
    /// Unique courier identifier.
    pub id: CourierId,
    /// Courier or company name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Service provider (e.g., "FedEx", "DHL", "Local").
    pub service_provider: String,
    /// Orders currently assigned.
    pub current_load: i64,
    /// Maximum concurrent orders.
    pub max_load: i64,
    /// Whether the courier accepts new assignments.
    pub is_active: bool,
    /// IDs of assigned, undelivered orders.
    pub assigned_orders: Vec<OrderId>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Courier {
    /// Check whether the courier can take one more order.
    pub fn has_capacity(&self) -> bool {
        self.is_active && self.current_load < self.max_load
    }

    /// Assign an order to this courier.
    ///
    /// Assigning an order that is already on the courier's list is a no-op.
    pub fn assign(&mut self, order_id: OrderId) -> Result<(), CommerceError> {
        if self.assigned_orders.contains(&order_id) {
            return Ok(());
        }
        if !self.is_active {
            return Err(CommerceError::CourierInactive(self.id.to_string()));
        }
        if self.current_load >= self.max_load {
            return Err(CommerceError::CourierAtCapacity {
                courier_id: self.id.to_string(),
                max: self.max_load,
            });
        }
        self.assigned_orders.push(order_id);
        self.current_load += 1;
        Ok(())
    }

    /// Release an order from this courier (delivered or reassigned).
    ///
    /// Releasing an order that is not assigned is a no-op returning `false`.
    pub fn release(&mut self, order_id: &OrderId) -> bool {
        let len_before = self.assigned_orders.len();
        self.assigned_orders.retain(|id| id != order_id);
        let released = self.assigned_orders.len() < len_before;
        if released {
            self.current_load -= 1;
        }
        released
    }
}
