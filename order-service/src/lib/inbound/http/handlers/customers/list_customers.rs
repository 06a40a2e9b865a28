use axum::extract::State;
use axum::http::StatusCode;

use super::CustomerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerData>>, ApiError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        customers.iter().map(CustomerData::from).collect(),
    ))
}
