use async_trait::async_trait;

use crate::dashboard::errors::DashboardError;
use crate::dashboard::models::AggregateStats;
use crate::dashboard::models::DailyOrderCount;

/// Read-only statistics over the current store contents.
#[async_trait]
pub trait DashboardServicePort: Send + Sync + 'static {
    async fn get_stats(&self) -> Result<AggregateStats, DashboardError>;

    /// Order counts for the last seven days, today included.
    async fn weekly_orders(&self) -> Result<Vec<DailyOrderCount>, DashboardError>;
}
