use thiserror::Error;

use crate::customer::errors::CustomerError;
use crate::order::errors::OrderError;

#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("Failed to load orders: {0}")]
    Orders(#[from] OrderError),

    #[error("Failed to count customers: {0}")]
    Customers(#[from] CustomerError),
}
