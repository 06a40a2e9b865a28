use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::customer::ports::CustomerRepository;
use crate::dashboard::aggregator::Aggregator;
use crate::dashboard::errors::DashboardError;
use crate::dashboard::models::AggregateStats;
use crate::dashboard::models::DailyOrderCount;
use crate::dashboard::ports::DashboardServicePort;
use crate::order::ports::OrderRepository;

/// Loads a snapshot from the stores and hands it to the [`Aggregator`].
pub struct DashboardService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    orders: Arc<OR>,
    customers: Arc<CR>,
    aggregator: Aggregator,
}

impl<OR, CR> DashboardService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    pub fn new(orders: Arc<OR>, customers: Arc<CR>, aggregator: Aggregator) -> Self {
        Self {
            orders,
            customers,
            aggregator,
        }
    }
}

#[async_trait]
impl<OR, CR> DashboardServicePort for DashboardService<OR, CR>
where
    OR: OrderRepository,
    CR: CustomerRepository,
{
    async fn get_stats(&self) -> Result<AggregateStats, DashboardError> {
        let orders = self.orders.list_records().await?;
        let customer_count = self.customers.count().await?;

        let stats = self.aggregator.compute_stats(&orders, customer_count);
        tracing::debug!(
            total_orders = stats.total_orders,
            total_customers = stats.total_customers,
            "Dashboard stats computed"
        );

        Ok(stats)
    }

    async fn weekly_orders(&self) -> Result<Vec<DailyOrderCount>, DashboardError> {
        let orders = self.orders.list_records().await?;
        Ok(self
            .aggregator
            .weekly_orders(&orders, Utc::now().date_naive()))
    }
}
