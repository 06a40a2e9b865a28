use thiserror::Error;

use crate::customer::errors::CustomerError;
use crate::customer::models::CustomerId;
use crate::order::models::OrderId;
use crate::user::errors::AuthError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderIdError {
    #[error("Invalid order id: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderStatusError {
    #[error("Unknown order status: {0}")]
    Unknown(String),
}

/// Top-level error for order operations
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(#[from] OrderIdError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] OrderStatusError),

    #[error("Order with id {0} not found")]
    NotFound(OrderId),

    #[error("Customer with id {0} not found")]
    CustomerNotFound(CustomerId),

    #[error(transparent)]
    Access(#[from] AuthError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<CustomerError> for OrderError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => OrderError::CustomerNotFound(id),
            CustomerError::DatabaseError(msg) => OrderError::DatabaseError(msg),
            other => OrderError::Unknown(other.to_string()),
        }
    }
}
