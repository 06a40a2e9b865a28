use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::order::errors::OrderError;
use crate::order::models::CreateOrderCommand;
use crate::order::models::Order;
use crate::order::models::OrderId;
use crate::order::models::OrderRecord;
use crate::order::models::UpdateOrderCommand;

/// Port for order domain service operations.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `CustomerNotFound` - Referenced customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError>;

    /// # Errors
    /// * `NotFound` - Order does not exist
    async fn get_order(&self, id: &OrderId) -> Result<Order, OrderError>;

    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Admin only.
    ///
    /// # Errors
    /// * `Access(Forbidden)` - Actor is not an admin
    /// * `NotFound` - Order does not exist
    async fn update_order(
        &self,
        id: &OrderId,
        command: UpdateOrderCommand,
        actor: &User,
    ) -> Result<Order, OrderError>;

    /// Admin only.
    ///
    /// # Errors
    /// * `Access(Forbidden)` - Actor is not an admin
    /// * `NotFound` - Order does not exist
    async fn delete_order(&self, id: &OrderId, actor: &User) -> Result<(), OrderError>;
}

/// Persistence operations for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// # Errors
    /// * `CustomerNotFound` - Referenced customer does not exist
    async fn create(&self, command: CreateOrderCommand) -> Result<Order, OrderError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Every order in the store, in id order.
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Every order in the store, in id order, for reporting.
    ///
    /// A row that does not decode comes back as `OrderRecord::Malformed`
    /// instead of failing the whole read.
    async fn list_records(&self) -> Result<Vec<OrderRecord>, OrderError>;

    /// # Errors
    /// * `NotFound` - Order does not exist
    async fn update(&self, order: Order) -> Result<Order, OrderError>;

    /// # Errors
    /// * `NotFound` - Order does not exist
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;
}
