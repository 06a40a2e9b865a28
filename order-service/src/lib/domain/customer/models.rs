use std::fmt;

use crate::customer::errors::CustomerIdError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Customer record, owned by the user who created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub user_id: UserId,
}

/// Customer unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub i64);

impl CustomerId {
    /// Parse a customer ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer identifier
    pub fn from_string(s: &str) -> Result<Self, CustomerIdError> {
        s.parse::<i64>()
            .map(CustomerId)
            .map_err(|e| CustomerIdError::InvalidFormat(format!("{s}: {e}")))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Customer fields as handed to the store, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
    pub user_id: UserId,
}

/// Command to create a customer
#[derive(Debug)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub email: EmailAddress,
    pub phone: String,
}

impl CreateCustomerCommand {
    pub fn new(name: String, email: EmailAddress, phone: String) -> Self {
        Self { name, email, phone }
    }
}

/// Command to update an existing customer.
///
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateCustomerCommand {
    pub name: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
}

impl UpdateCustomerCommand {
    /// Apply the provided fields onto `customer`.
    pub fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(phone) = self.phone {
            customer.phone = phone;
        }
    }
}
