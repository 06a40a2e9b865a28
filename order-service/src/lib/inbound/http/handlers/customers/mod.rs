pub mod create_customer;
pub mod delete_customer;
pub mod get_customer;
pub mod list_customers;
pub mod update_customer;

pub use create_customer::create_customer;
pub use delete_customer::delete_customer;
pub use get_customer::get_customer;
pub use list_customers::list_customers;
pub use update_customer::update_customer;

use serde::Serialize;

use crate::customer::errors::CustomerError;
use crate::customer::models::Customer;
use crate::customer::models::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_id: i64,
}

impl From<&Customer> for CustomerData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.0,
            name: customer.name.clone(),
            email: customer.email.as_str().to_string(),
            phone: customer.phone.clone(),
            user_id: customer.user_id.0,
        }
    }
}

fn parse_customer_id(raw: &str) -> Result<CustomerId, CustomerError> {
    CustomerId::from_string(raw).map_err(CustomerError::from)
}
