use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::parse_customer_id;
use super::CustomerData;
use crate::customer::errors::CustomerError;
use crate::customer::models::UpdateCustomerCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a customer (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateCustomerRequest {
    fn try_into_command(self) -> Result<UpdateCustomerCommand, CustomerError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateCustomerCommand {
            name: self.name,
            email,
            phone: self.phone,
        })
    }
}

pub async fn update_customer(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    let customer_id = parse_customer_id(&id)?;
    let command = req.try_into_command()?;

    state
        .customer_service
        .update_customer(&customer_id, command, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}
