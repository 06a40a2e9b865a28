use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::errors::UserError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Arguments
    /// * `email` - Email the account was registered with
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Signed access token with its scheme label
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password or inactive account
    /// * `Internal` - Store or token-signing failure
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve a presented token into the live principal.
    ///
    /// # Arguments
    /// * `token` - Bearer token string
    ///
    /// # Returns
    /// Current store record of the token's subject
    ///
    /// # Errors
    /// * `Unauthenticated` - Invalid token, or subject missing or inactive
    /// * `Internal` - Store failure
    async fn resolve(&self, token: &str) -> Result<User, AuthError>;

    /// Register a new non-admin account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHashing` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns the identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
