//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unit price must be non-negative.
    #[error("Negative unit price: {0} cents")]
    NegativePrice(i64),

    /// Quantity exceeds the per-line-item cap.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch between cart and item.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Cart is empty.
    #[error("Cart is empty")]
    EmptyCart,

    /// Persisted cart snapshot failed invariant checks.
    #[error("Invalid cart snapshot: {0}")]
    InvalidSnapshot(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Courier not found.
    #[error("Courier not found: {0}")]
    CourierNotFound(String),

    /// Courier is deactivated.
    #[error("Courier is inactive: {0}")]
    CourierInactive(String),

    /// Courier cannot take more orders.
    #[error("Courier {courier_id} at capacity ({max} orders)")]
    CourierAtCapacity { courier_id: String, max: i64 },

    /// Disallowed order status transition.
    #[error("Invalid order status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
