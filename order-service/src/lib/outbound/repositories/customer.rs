use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::customer::errors::CustomerError;
use crate::customer::models::Customer;
use crate::customer::models::CustomerId;
use crate::customer::models::NewCustomer;
use crate::customer::ports::CustomerRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: PgRow) -> Result<Customer, CustomerError> {
        let email: String = row.try_get("email").map_err(database_error)?;

        Ok(Customer {
            id: CustomerId(row.try_get("id").map_err(database_error)?),
            name: row.try_get("name").map_err(database_error)?,
            email: EmailAddress::new(email)?,
            phone: row.try_get("phone").map_err(database_error)?,
            user_id: UserId(row.try_get("user_id").map_err(database_error)?),
        })
    }
}

fn database_error(e: sqlx::Error) -> CustomerError {
    CustomerError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error, email: &EmailAddress) -> CustomerError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("customers_email_key") {
            return CustomerError::EmailAlreadyExists(email.to_string());
        }
    }
    database_error(e)
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, phone, user_id
            "#,
        )
        .bind(&customer.name)
        .bind(customer.email.as_str())
        .bind(&customer.phone)
        .bind(customer.user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &customer.email))?;

        Self::row_to_customer(row)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, phone, user_id
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_customer).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, phone, user_id
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }

    async fn count(&self) -> Result<u64, CustomerError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(count.max(0) as u64)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, email = $3, phone = $4
            WHERE id = $1
            "#,
        )
        .bind(customer.id.0)
        .bind(&customer.name)
        .bind(customer.email.as_str())
        .bind(&customer.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &customer.email))?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound(customer.id));
        }

        Ok(customer)
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), CustomerError> {
        // Orders go with it through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound(*id));
        }

        Ok(())
    }
}
