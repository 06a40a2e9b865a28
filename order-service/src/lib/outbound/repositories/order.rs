use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;
use sqlx::Row;

use crate::customer::models::CustomerId;
use crate::order::errors::OrderError;
use crate::order::models::CreateOrderCommand;
use crate::order::models::Order;
use crate::order::models::MalformedOrder;
use crate::order::models::OrderId;
use crate::order::models::OrderRecord;
use crate::order::models::OrderStatus;
use crate::order::ports::OrderRepository;

const ORDER_COLUMNS: &str =
    "id, items, delivery_address, order_date, delivery_date, status, customer_id";

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &PgRow) -> Result<Order, OrderError> {
        let Json(items): Json<Vec<String>> = row.try_get("items").map_err(database_error)?;
        let status: String = row.try_get("status").map_err(database_error)?;
        let order_date: DateTime<Utc> = row.try_get("order_date").map_err(database_error)?;

        Ok(Order {
            id: OrderId(row.try_get("id").map_err(database_error)?),
            items,
            delivery_address: row.try_get("delivery_address").map_err(database_error)?,
            order_date,
            delivery_date: row.try_get("delivery_date").map_err(database_error)?,
            status: status.parse::<OrderStatus>()?,
            customer_id: CustomerId(row.try_get("customer_id").map_err(database_error)?),
        })
    }

    fn row_to_record(row: &PgRow) -> Result<OrderRecord, OrderError> {
        match Self::row_to_order(row) {
            Ok(order) => Ok(OrderRecord::Valid(order)),
            Err(e) => Ok(OrderRecord::Malformed(MalformedOrder {
                id: OrderId(row.try_get("id").map_err(database_error)?),
                order_date: row.try_get("order_date").ok(),
                reason: e.to_string(),
            })),
        }
    }
}

fn database_error(e: sqlx::Error) -> OrderError {
    OrderError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, command: CreateOrderCommand) -> Result<Order, OrderError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO orders (items, delivery_address, order_date, delivery_date, status, customer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(Json(&command.items))
        .bind(&command.delivery_address)
        .bind(command.order_date)
        .bind(command.delivery_date)
        .bind(command.status.as_str())
        .bind(command.customer_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return OrderError::CustomerNotFound(command.customer_id);
                }
            }
            database_error(e)
        })?;

        Self::row_to_order(&row)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn list_records(&self) -> Result<Vec<OrderRecord>, OrderError> {
        let rows = sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET items = $2, delivery_address = $3, delivery_date = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(order.id.0)
        .bind(Json(&order.items))
        .bind(&order.delivery_address)
        .bind(order.delivery_date)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(OrderError::NotFound(order.id));
        }

        Ok(order)
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(OrderError::NotFound(*id));
        }

        Ok(())
    }
}
