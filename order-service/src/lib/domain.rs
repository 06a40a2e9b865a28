pub mod customer;
pub mod dashboard;
pub mod order;
pub mod user;
