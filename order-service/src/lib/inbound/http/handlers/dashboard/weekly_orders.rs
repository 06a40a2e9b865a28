use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::dashboard::models::DailyOrderCount;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn weekly_orders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<WeeklyOrderData>>, ApiError> {
    let week = state.dashboard_service.weekly_orders().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        week.into_iter().map(WeeklyOrderData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyOrderData {
    pub day: String,
    pub orders: u64,
}

impl From<DailyOrderCount> for WeeklyOrderData {
    fn from(count: DailyOrderCount) -> Self {
        Self {
            day: count.day,
            orders: count.orders,
        }
    }
}
