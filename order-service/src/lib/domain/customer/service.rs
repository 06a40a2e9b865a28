use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::customer::models::CreateCustomerCommand;
use crate::customer::models::Customer;
use crate::customer::models::CustomerId;
use crate::customer::models::NewCustomer;
use crate::customer::models::UpdateCustomerCommand;
use crate::customer::ports::CustomerRepository;
use crate::customer::ports::CustomerServicePort;
use crate::domain::user::guard;
use crate::domain::user::models::User;

/// Domain service for customer records.
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }

    async fn load(&self, id: &CustomerId) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(*id))
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn create_customer(
        &self,
        command: CreateCustomerCommand,
        owner: &User,
    ) -> Result<Customer, CustomerError> {
        let customer = NewCustomer {
            name: command.name,
            email: command.email,
            phone: command.phone,
            user_id: owner.id,
        };

        let created = self.repository.create(customer).await?;
        tracing::info!(customer_id = %created.id, owner_id = %owner.id, "Customer created");

        Ok(created)
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CustomerError> {
        self.load(id).await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repository.list_all().await
    }

    async fn update_customer(
        &self,
        id: &CustomerId,
        command: UpdateCustomerCommand,
        actor: &User,
    ) -> Result<Customer, CustomerError> {
        let mut customer = self.load(id).await?;
        guard::require_owner_or_admin(actor, &customer.user_id)?;

        command.apply(&mut customer);
        self.repository.update(customer).await
    }

    async fn delete_customer(&self, id: &CustomerId, actor: &User) -> Result<(), CustomerError> {
        let customer = self.load(id).await?;
        guard::require_owner_or_admin(actor, &customer.user_id)?;

        self.repository.delete(id).await?;
        tracing::info!(customer_id = %id, actor_id = %actor.id, "Customer deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::user::errors::AuthError;

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

    fn principal(id: i64, is_admin: bool) -> User {
        User {
            id: UserId(id),
            email: EmailAddress::new(format!("user{id}@example.com")).unwrap(),
            name: String::new(),
            telephone: String::new(),
            role: "user".to_string(),
            password_hash: String::new(),
            is_admin,
            is_active: true,
        }
    }

    fn customer(id: i64, owner: i64) -> Customer {
        Customer {
            id: CustomerId(id),
            name: "Jane Doe".to_string(),
            email: EmailAddress::new(format!("customer{id}@example.com")).unwrap(),
            phone: "555-0199".to_string(),
            user_id: UserId(owner),
        }
    }

    #[tokio::test]
    async fn test_create_customer_is_owned_by_caller() {
        let mut repository = MockTestCustomerRepository::new();

        repository
            .expect_create()
            .withf(|customer| customer.user_id == UserId(3))
            .times(1)
            .returning(|new_customer| {
                Ok(Customer {
                    id: CustomerId(1),
                    name: new_customer.name,
                    email: new_customer.email,
                    phone: new_customer.phone,
                    user_id: new_customer.user_id,
                })
            });

        let service = CustomerService::new(Arc::new(repository));

        let command = CreateCustomerCommand::new(
            "Jane Doe".to_string(),
            EmailAddress::new("jane@example.com".to_string()).unwrap(),
            "555-0199".to_string(),
        );

        let created = service
            .create_customer(command, &principal(3, false))
            .await
            .expect("Create failed");
        assert_eq!(created.user_id, UserId(3));
    }

    #[tokio::test]
    async fn test_get_missing_customer() {
        let mut repository = MockTestCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = CustomerService::new(Arc::new(repository));

        let result = service.get_customer(&CustomerId(42)).await;
        assert!(matches!(
            result.unwrap_err(),
            CustomerError::NotFound(CustomerId(42))
        ));
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(customer(1, 3))));
        repository
            .expect_update()
            .withf(|customer| customer.name == "Renamed" && customer.phone == "555-0199")
            .times(1)
            .returning(Ok);

        let service = CustomerService::new(Arc::new(repository));

        let command = UpdateCustomerCommand {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let updated = service
            .update_customer(&CustomerId(1), command, &principal(3, false))
            .await
            .expect("Update failed");
        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_by_stranger_is_forbidden() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(customer(1, 3))));
        repository.expect_update().times(0);

        let service = CustomerService::new(Arc::new(repository));

        let result = service
            .update_customer(
                &CustomerId(1),
                UpdateCustomerCommand::default(),
                &principal(4, false),
            )
            .await;
        assert!(matches!(
            result.unwrap_err(),
            CustomerError::Access(AuthError::NotOwner)
        ));
    }

    #[tokio::test]
    async fn test_delete_by_admin() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(customer(1, 3))));
        repository
            .expect_delete()
            .withf(|id| *id == CustomerId(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerService::new(Arc::new(repository));

        service
            .delete_customer(&CustomerId(1), &principal(9, true))
            .await
            .expect("Delete failed");
    }

    #[tokio::test]
    async fn test_delete_missing_customer() {
        let mut repository = MockTestCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = CustomerService::new(Arc::new(repository));

        let result = service
            .delete_customer(&CustomerId(5), &principal(9, true))
            .await;
        assert!(matches!(result.unwrap_err(), CustomerError::NotFound(_)));
    }
}
