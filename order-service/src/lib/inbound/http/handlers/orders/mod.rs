pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;
pub mod update_order;

pub use create_order::create_order;
pub use delete_order::delete_order;
pub use get_order::get_order;
pub use list_orders::list_orders;
pub use update_order::update_order;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::order::errors::OrderError;
use crate::order::models::Order;
use crate::order::models::OrderId;
use crate::order::models::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub items: Vec<String>,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub customer_id: i64,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.0,
            items: order.items.clone(),
            delivery_address: order.delivery_address.clone(),
            order_date: order.order_date,
            delivery_date: order.delivery_date,
            status: order.status,
            customer_id: order.customer_id.0,
        }
    }
}

fn parse_order_id(raw: &str) -> Result<OrderId, OrderError> {
    OrderId::from_string(raw).map_err(OrderError::from)
}

fn parse_status(raw: Option<String>) -> Result<Option<OrderStatus>, OrderError> {
    raw.map(|s| s.parse::<OrderStatus>())
        .transpose()
        .map_err(OrderError::from)
}
