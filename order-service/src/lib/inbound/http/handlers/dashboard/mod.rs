pub mod get_stats;
pub mod weekly_orders;

pub use get_stats::get_stats;
pub use weekly_orders::weekly_orders;
