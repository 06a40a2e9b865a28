use axum::extract::State;
use axum::http::StatusCode;

use super::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    let orders = state.order_service.list_orders().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        orders.iter().map(OrderData::from).collect(),
    ))
}
