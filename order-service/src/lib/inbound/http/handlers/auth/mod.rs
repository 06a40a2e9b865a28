pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;

use serde::Serialize;

use crate::domain::user::models::User;

/// Public view of a principal; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub telephone: String,
    pub role: String,
    pub is_admin: bool,
    pub is_active: bool,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            email: user.email.as_str().to_string(),
            name: user.name.clone(),
            telephone: user.telephone.clone(),
            role: user.role.clone(),
            is_admin: user.is_admin,
            is_active: user.is_active,
        }
    }
}
