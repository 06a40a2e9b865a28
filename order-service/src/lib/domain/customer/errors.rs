use thiserror::Error;

use crate::customer::models::CustomerId;
use crate::user::errors::AuthError;
use crate::user::errors::EmailError;

/// Error for CustomerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerIdError {
    #[error("Invalid customer id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for customer operations
#[derive(Debug, Clone, Error)]
pub enum CustomerError {
    #[error("Invalid customer ID: {0}")]
    InvalidCustomerId(#[from] CustomerIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Customer with id {0} not found")]
    NotFound(CustomerId),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error(transparent)]
    Access(#[from] AuthError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
