use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::parse_status;
use super::OrderData;
use crate::customer::models::CustomerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::order::errors::OrderError;
use crate::order::models::CreateOrderCommand;

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .order_service
        .create_order(command)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

/// HTTP request body for placing an order (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    customer_id: i64,
    #[serde(default)]
    items: Vec<String>,
    delivery_address: Option<String>,
    /// Defaults to the time of the request.
    order_date: Option<DateTime<Utc>>,
    delivery_date: Option<DateTime<Utc>>,
    status: Option<String>,
}

impl CreateOrderRequest {
    fn try_into_command(self) -> Result<CreateOrderCommand, OrderError> {
        Ok(CreateOrderCommand {
            customer_id: CustomerId(self.customer_id),
            items: self.items,
            delivery_address: self.delivery_address,
            order_date: self.order_date.unwrap_or_else(Utc::now),
            delivery_date: self.delivery_date,
            status: parse_status(self.status)?.unwrap_or_default(),
        })
    }
}
