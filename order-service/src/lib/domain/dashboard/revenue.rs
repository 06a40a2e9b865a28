use crate::order::models::OrderRecord;

pub const DEFAULT_ITEMS_PER_ORDER: f64 = 2.5;
pub const DEFAULT_UNIT_PRICE: f64 = 50.0;

/// Strategy for turning a set of orders into a revenue figure.
pub trait RevenueModel: Send + Sync {
    fn total_revenue(&self, orders: &[OrderRecord]) -> f64;
}

/// Flat estimate: every order is assumed to hold the same number of items
/// at the same unit price. Order contents are not consulted, so malformed
/// records are priced like any other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedRevenue {
    pub items_per_order: f64,
    pub unit_price: f64,
}

impl EstimatedRevenue {
    pub fn new(items_per_order: f64, unit_price: f64) -> Self {
        Self {
            items_per_order,
            unit_price,
        }
    }
}

impl Default for EstimatedRevenue {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_ORDER, DEFAULT_UNIT_PRICE)
    }
}

impl RevenueModel for EstimatedRevenue {
    fn total_revenue(&self, orders: &[OrderRecord]) -> f64 {
        orders.len() as f64 * self.items_per_order * self.unit_price
    }
}
