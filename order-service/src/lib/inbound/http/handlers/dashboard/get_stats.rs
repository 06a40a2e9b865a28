use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::dashboard::models::AggregateStats;
use crate::dashboard::models::CountryCount;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<ApiSuccess<StatsResponseData>, ApiError> {
    state
        .dashboard_service
        .get_stats()
        .await
        .map_err(ApiError::from)
        .map(|stats| ApiSuccess::new(StatusCode::OK, stats.into()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponseData {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_customers: u64,
    pub avg_order_value: f64,
    pub top_shipping_countries: Vec<CountryData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryData {
    pub country: String,
    pub orders: u64,
}

impl From<CountryCount> for CountryData {
    fn from(count: CountryCount) -> Self {
        Self {
            country: count.country,
            orders: count.orders,
        }
    }
}

impl From<AggregateStats> for StatsResponseData {
    fn from(stats: AggregateStats) -> Self {
        Self {
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            total_customers: stats.total_customers,
            avg_order_value: stats.avg_order_value,
            top_shipping_countries: stats
                .top_shipping_countries
                .into_iter()
                .map(CountryData::from)
                .collect(),
        }
    }
}
