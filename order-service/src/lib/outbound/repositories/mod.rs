pub mod customer;
pub mod order;
pub mod user;

pub use customer::PostgresCustomerRepository;
pub use order::PostgresOrderRepository;
pub use user::PostgresUserRepository;
