use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CustomerData;
use crate::customer::errors::CustomerError;
use crate::customer::models::CreateCustomerCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_customer(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(body): Json<CreateCustomerRequest>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .customer_service
        .create_customer(command, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::CREATED, customer.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCustomerRequest {
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
}

impl CreateCustomerRequest {
    fn try_into_command(self) -> Result<CreateCustomerCommand, CustomerError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateCustomerCommand::new(self.name, email, self.phone))
    }
}
