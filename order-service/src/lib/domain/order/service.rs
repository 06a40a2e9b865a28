use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::ports::CustomerRepository;
use crate::domain::user::guard;
use crate::domain::user::guard::Requirement;
use crate::domain::user::models::User;
use crate::order::errors::OrderError;
use crate::order::models::CreateOrderCommand;
use crate::order::models::Order;
use crate::order::models::OrderId;
use crate::order::models::UpdateOrderCommand;
use crate::order::ports::OrderRepository;
use crate::order::ports::OrderServicePort;

/// Domain service for order records.
///
/// Reads are open to any principal; update and delete are admin only.
pub struct OrderService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    orders: Arc<OR>,
    customers: Arc<CR>,
}

impl<OR, CR> OrderService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    pub fn new(orders: Arc<OR>, customers: Arc<CR>) -> Self {
        Self { orders, customers }
    }

    async fn load(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(*id))
    }
}

#[async_trait]
impl<OR, CR> OrderServicePort for OrderService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    async fn create_order(&self, command: CreateOrderCommand) -> Result<Order, OrderError> {
        if self.customers.find_by_id(&command.customer_id).await?.is_none() {
            return Err(OrderError::CustomerNotFound(command.customer_id));
        }

        let created = self.orders.create(command).await?;
        tracing::info!(
            order_id = %created.id,
            customer_id = %created.customer_id,
            "Order created"
        );

        Ok(created)
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.load(id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.orders.list_all().await
    }

    async fn update_order(
        &self,
        id: &OrderId,
        command: UpdateOrderCommand,
        actor: &User,
    ) -> Result<Order, OrderError> {
        guard::require(actor.clone(), Requirement::Admin)?;

        let mut order = self.load(id).await?;
        command.apply(&mut order);

        self.orders.update(order).await
    }

    async fn delete_order(&self, id: &OrderId, actor: &User) -> Result<(), OrderError> {
        guard::require(actor.clone(), Requirement::Admin)?;

        self.orders.delete(id).await?;
        tracing::info!(order_id = %id, actor_id = %actor.id, "Order deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::customer::errors::CustomerError;
    use crate::customer::models::Customer;
    use crate::customer::models::CustomerId;
    use crate::customer::models::NewCustomer;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::order::models::OrderRecord;
    use crate::order::models::OrderStatus;
    use crate::user::errors::AuthError;

    mock! {
        pub TestOrderRepository {}

        #[async_trait]
        impl OrderRepository for TestOrderRepository {
            async fn create(&self, command: CreateOrderCommand) -> Result<Order, OrderError>;
            async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;
            async fn list_all(&self) -> Result<Vec<Order>, OrderError>;
            async fn list_records(&self) -> Result<Vec<OrderRecord>, OrderError>;
            async fn update(&self, order: Order) -> Result<Order, OrderError>;
            async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;
        }
    }

    mock! {
        pub TestCustomerRepository {}

        #[async_trait]
        impl CustomerRepository for TestCustomerRepository {
            async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError>;
            async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
            async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;
            async fn count(&self) -> Result<u64, CustomerError>;
            async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;
            async fn delete(&self, id: &CustomerId) -> Result<(), CustomerError>;
        }
    }

    fn principal(is_admin: bool) -> User {
        User {
            id: UserId(1),
            email: EmailAddress::new("staff@example.com".to_string()).unwrap(),
            name: String::new(),
            telephone: String::new(),
            role: "user".to_string(),
            password_hash: String::new(),
            is_admin,
            is_active: true,
        }
    }

    fn command(customer_id: i64) -> CreateOrderCommand {
        CreateOrderCommand {
            customer_id: CustomerId(customer_id),
            items: vec!["Rubber Duck".to_string()],
            delivery_address: Some("10 Downing St, London, UK".to_string()),
            order_date: Utc::now(),
            delivery_date: None,
            status: OrderStatus::Pending,
        }
    }

    fn order(id: i64) -> Order {
        let command = command(1);
        Order {
            id: OrderId(id),
            items: command.items,
            delivery_address: command.delivery_address,
            order_date: command.order_date,
            delivery_date: None,
            status: OrderStatus::Pending,
            customer_id: command.customer_id,
        }
    }

    fn customer(id: i64) -> Customer {
        Customer {
            id: CustomerId(id),
            name: "Jane".to_string(),
            email: EmailAddress::new("jane@example.com".to_string()).unwrap(),
            phone: String::new(),
            user_id: UserId(1),
        }
    }

    #[tokio::test]
    async fn test_create_order_for_unknown_customer() {
        let mut orders = MockTestOrderRepository::new();
        let mut customers = MockTestCustomerRepository::new();

        customers.expect_find_by_id().returning(|_| Ok(None));
        orders.expect_create().times(0);

        let service = OrderService::new(Arc::new(orders), Arc::new(customers));

        let result = service.create_order(command(77)).await;
        assert!(matches!(
            result.unwrap_err(),
            OrderError::CustomerNotFound(CustomerId(77))
        ));
    }

    #[tokio::test]
    async fn test_create_order() {
        let mut orders = MockTestOrderRepository::new();
        let mut customers = MockTestCustomerRepository::new();

        customers
            .expect_find_by_id()
            .returning(|id| Ok(Some(customer(id.0))));
        orders.expect_create().times(1).returning(|_| Ok(order(5)));

        let service = OrderService::new(Arc::new(orders), Arc::new(customers));

        let created = service.create_order(command(1)).await.expect("Create failed");
        assert_eq!(created.id, OrderId(5));
    }

    #[tokio::test]
    async fn test_update_requires_admin() {
        let mut orders = MockTestOrderRepository::new();
        orders.expect_find_by_id().times(0);
        orders.expect_update().times(0);

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(MockTestCustomerRepository::new()),
        );

        let result = service
            .update_order(&OrderId(1), UpdateOrderCommand::default(), &principal(false))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            OrderError::Access(AuthError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn test_admin_updates_status() {
        let mut orders = MockTestOrderRepository::new();
        orders
            .expect_find_by_id()
            .returning(|id| Ok(Some(order(id.0))));
        orders
            .expect_update()
            .withf(|order| order.status == OrderStatus::Delivered)
            .times(1)
            .returning(Ok);

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(MockTestCustomerRepository::new()),
        );

        let command = UpdateOrderCommand {
            status: Some(OrderStatus::Delivered),
            ..Default::default()
        };

        let updated = service
            .update_order(&OrderId(3), command, &principal(true))
            .await
            .expect("Update failed");
        assert_eq!(updated.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn test_delete_requires_admin() {
        let mut orders = MockTestOrderRepository::new();
        orders.expect_delete().times(0);

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(MockTestCustomerRepository::new()),
        );

        let result = service.delete_order(&OrderId(1), &principal(false)).await;
        assert!(matches!(
            result.unwrap_err(),
            OrderError::Access(AuthError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let mut orders = MockTestOrderRepository::new();
        orders.expect_find_by_id().returning(|_| Ok(None));

        let service = OrderService::new(
            Arc::new(orders),
            Arc::new(MockTestCustomerRepository::new()),
        );

        let result = service.get_order(&OrderId(9)).await;
        assert!(matches!(result.unwrap_err(), OrderError::NotFound(OrderId(9))));
    }
}
