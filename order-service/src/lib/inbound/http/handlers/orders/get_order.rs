use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_order_id;
use super::OrderData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order_id = parse_order_id(&order_id)?;

    state
        .order_service
        .get_order(&order_id)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}
