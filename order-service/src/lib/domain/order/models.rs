use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::customer::models::CustomerId;
use crate::order::errors::OrderIdError;
use crate::order::errors::OrderStatusError;

/// Order record as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<String>,
    /// Free text; may name a country anywhere in the string.
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub customer_id: CustomerId,
}

/// A stored order as read for reporting.
///
/// A row that cannot be decoded into an [`Order`] keeps its id, its order
/// date when that column was readable, and the decode failure.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRecord {
    Valid(Order),
    Malformed(MalformedOrder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MalformedOrder {
    pub id: OrderId,
    pub order_date: Option<DateTime<Utc>>,
    pub reason: String,
}

impl OrderRecord {
    pub fn id(&self) -> OrderId {
        match self {
            OrderRecord::Valid(order) => order.id,
            OrderRecord::Malformed(malformed) => malformed.id,
        }
    }

    pub fn order_date(&self) -> Option<DateTime<Utc>> {
        match self {
            OrderRecord::Valid(order) => Some(order.order_date),
            OrderRecord::Malformed(malformed) => malformed.order_date,
        }
    }
}

impl From<Order> for OrderRecord {
    fn from(order: Order) -> Self {
        OrderRecord::Valid(order)
    }
}

/// Order unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub i64);

impl OrderId {
    /// # Errors
    /// * `InvalidFormat` - String is not an integer identifier
    pub fn from_string(s: &str) -> Result<Self, OrderIdError> {
        s.parse::<i64>()
            .map(OrderId)
            .map_err(|e| OrderIdError::InvalidFormat(format!("{s}: {e}")))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderStatusError::Unknown(other.to_string())),
        }
    }
}

/// Command to place an order for an existing customer
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub customer_id: CustomerId,
    pub items: Vec<String>,
    pub delivery_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
}

/// Command to update an order.
///
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderCommand {
    pub items: Option<Vec<String>>,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
}

impl UpdateOrderCommand {
    pub fn apply(self, order: &mut Order) {
        if let Some(items) = self.items {
            order.items = items;
        }
        if let Some(address) = self.delivery_address {
            order.delivery_address = Some(address);
        }
        if let Some(date) = self.delivery_date {
            order.delivery_date = Some(date);
        }
        if let Some(status) = self.status {
            order.status = status;
        }
    }
}
