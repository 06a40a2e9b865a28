/// Headline figures for the dashboard, recomputed on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_customers: u64,
    pub avg_order_value: f64,
    /// At most ten entries, highest count first.
    pub top_shipping_countries: Vec<CountryCount>,
}

impl AggregateStats {
    /// Stats for a store holding no orders.
    pub fn empty(total_customers: u64) -> Self {
        Self {
            total_orders: 0,
            total_revenue: 0.0,
            total_customers,
            avg_order_value: 0.0,
            top_shipping_countries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCount {
    pub country: String,
    pub orders: u64,
}

/// Orders placed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOrderCount {
    /// Short weekday label, e.g. `Mon`.
    pub day: String,
    pub orders: u64,
}
