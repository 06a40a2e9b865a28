//! Pure computation of dashboard figures from a snapshot of orders.

use std::collections::HashMap;

use chrono::Days;
use chrono::NaiveDate;

use crate::dashboard::classifier::CountryTable;
use crate::dashboard::models::AggregateStats;
use crate::dashboard::models::CountryCount;
use crate::dashboard::models::DailyOrderCount;
use crate::dashboard::revenue::EstimatedRevenue;
use crate::dashboard::revenue::RevenueModel;
use crate::order::models::OrderRecord;

/// Number of countries kept in the ranking.
pub const TOP_COUNTRIES: usize = 10;

const WEEK_DAYS: u64 = 7;

pub struct Aggregator {
    countries: CountryTable,
    revenue: Box<dyn RevenueModel>,
}

impl Aggregator {
    pub fn new(countries: CountryTable, revenue: Box<dyn RevenueModel>) -> Self {
        Self { countries, revenue }
    }

    /// Summarise `orders`. Same input, same output.
    ///
    /// Malformed records count toward the totals but are left out of the
    /// country ranking.
    pub fn compute_stats(&self, orders: &[OrderRecord], customer_count: u64) -> AggregateStats {
        if orders.is_empty() {
            return AggregateStats::empty(customer_count);
        }

        let total_orders = orders.len() as u64;
        let total_revenue = self.revenue.total_revenue(orders);

        AggregateStats {
            total_orders,
            total_revenue,
            total_customers: customer_count,
            avg_order_value: total_revenue / total_orders as f64,
            top_shipping_countries: self.rank_countries(orders),
        }
    }

    fn rank_countries(&self, orders: &[OrderRecord]) -> Vec<CountryCount> {
        let mut tally: Vec<CountryCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut skipped = 0usize;

        for record in orders {
            let order = match record {
                OrderRecord::Valid(order) => order,
                OrderRecord::Malformed(malformed) => {
                    tracing::warn!(
                        order_id = %malformed.id,
                        reason = %malformed.reason,
                        "AggregationPartialSkip: malformed order left out of country ranking"
                    );
                    skipped += 1;
                    continue;
                }
            };
            let Some(address) = order.delivery_address.as_deref() else {
                skipped += 1;
                continue;
            };

            let label = self.countries.classify(address);
            match index.get(label) {
                Some(&position) => tally[position].orders += 1,
                None => {
                    index.insert(label, tally.len());
                    tally.push(CountryCount {
                        country: label.to_string(),
                        orders: 1,
                    });
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped,
                total = orders.len(),
                "AggregationPartialSkip: orders left out of country ranking"
            );
        }

        // Stable: ties keep first-encounter order
        tally.sort_by(|a, b| b.orders.cmp(&a.orders));
        tally.truncate(TOP_COUNTRIES);
        tally
    }

    /// Orders per day for the seven days ending `today`, oldest first.
    ///
    /// Records whose order date could not be read are not counted.
    pub fn weekly_orders(&self, orders: &[OrderRecord], today: NaiveDate) -> Vec<DailyOrderCount> {
        (0..WEEK_DAYS)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|day| DailyOrderCount {
                day: day.format("%a").to_string(),
                orders: orders
                    .iter()
                    .filter_map(OrderRecord::order_date)
                    .filter(|date| date.date_naive() == day)
                    .count() as u64,
            })
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(
            CountryTable::default(),
            Box::new(EstimatedRevenue::default()),
        )
    }
}
