use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::parse_order_id;
use super::parse_status;
use super::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::order::errors::OrderError;
use crate::order::models::UpdateOrderCommand;

/// HTTP request body for updating an order (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub items: Option<Vec<String>>,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl UpdateOrderRequest {
    fn try_into_command(self) -> Result<UpdateOrderCommand, OrderError> {
        Ok(UpdateOrderCommand {
            items: self.items,
            delivery_address: self.delivery_address,
            delivery_date: self.delivery_date,
            status: parse_status(self.status)?,
        })
    }
}

pub async fn update_order(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let command = req.try_into_command()?;

    state
        .order_service
        .update_order(&order_id, command, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}
