//! Checkout draft: the order submission payload built from a cart.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::{CustomerId, OrderId};
use crate::money::Money;
use crate::order::order::current_timestamp;
use crate::order::{Address, Order, OrderLineItem, OrderStatus};
use serde::{Deserialize, Serialize};

/// Customer details collected on the checkout page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerInfo {
    /// Account ID, if signed in.
    pub customer_id: Option<CustomerId>,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: Option<String>,
}

/// An order ready for submission to the order-creation API.
///
/// Line items and the total are copied out of the cart; once the backend
/// confirms placement the caller clears the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub customer: CustomerInfo,
    pub shipping_address: Address,
    pub items: Vec<OrderLineItem>,
    pub total: Money,
}

impl OrderDraft {
    /// Build a draft from the current cart contents.
    ///
    /// Fails on an empty cart or missing customer name/email.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerInfo,
        shipping_address: Address,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if customer.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "customer name is required".to_string(),
            ));
        }
        if customer.email.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "customer email is required".to_string(),
            ));
        }

        let items = cart
            .items()
            .iter()
            .map(|line| OrderLineItem {
                product_id: line.product_id.clone(),
                product_name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        Ok(Self {
            customer,
            shipping_address,
            items,
            total: cart.total_price(),
        })
    }

    /// Convert a confirmed draft into a pending order record.
    pub fn into_order(self, id: OrderId, order_number: impl Into<String>) -> Order {
        let now = current_timestamp();
        Order {
            id,
            order_number: order_number.into(),
            customer_id: self.customer.customer_id,
            customer_name: self.customer.name,
            email: self.customer.email,
            phone: self.customer.phone,
            items: self.items,
            total: self.total,
            status: OrderStatus::Pending,
            shipping_address: self.shipping_address,
            courier_id: None,
            tracking_number: None,
            created_at: now,
            updated_at: now,
        }
    }
}
