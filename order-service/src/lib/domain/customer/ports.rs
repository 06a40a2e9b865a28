use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::customer::models::CreateCustomerCommand;
use crate::customer::models::Customer;
use crate::customer::models::CustomerId;
use crate::customer::models::NewCustomer;
use crate::customer::models::UpdateCustomerCommand;
use crate::domain::user::models::User;

/// Port for customer domain service operations.
///
/// Mutations take the acting principal so ownership can be enforced.
#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// Create a customer owned by `owner`.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_customer(
        &self,
        command: CreateCustomerCommand,
        owner: &User,
    ) -> Result<Customer, CustomerError>;

    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CustomerError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Update a customer; only its owner or an admin may do so.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `Access(NotOwner)` - Actor is neither owner nor admin
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_customer(
        &self,
        id: &CustomerId,
        command: UpdateCustomerCommand,
        actor: &User,
    ) -> Result<Customer, CustomerError>;

    /// Delete a customer and its orders; only its owner or an admin may do so.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `Access(NotOwner)` - Actor is neither owner nor admin
    /// * `DatabaseError` - Database operation failed
    async fn delete_customer(&self, id: &CustomerId, actor: &User) -> Result<(), CustomerError>;
}

/// Persistence operations for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError>;

    /// # Returns
    /// Optional customer (None if not found)
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;

    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Number of customers in the store.
    async fn count(&self) -> Result<u64, CustomerError>;

    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;

    /// Remove a customer together with its orders.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    async fn delete(&self, id: &CustomerId) -> Result<(), CustomerError>;
}
