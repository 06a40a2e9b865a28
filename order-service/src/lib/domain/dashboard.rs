pub mod aggregator;
pub mod classifier;
pub mod errors;
pub mod models;
pub mod ports;
pub mod revenue;
pub mod service;
