use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::DEFAULT_ROLE;
use crate::user::errors::AuthError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service for logging in and resolving bearer tokens.
///
/// Stateless: every call reads the current principal from the repository.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Principal lookup implementation
    /// * `authenticator` - Password hashing and token codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self.repository.find_by_email(email).await.map_err(|e| {
            tracing::error!(error = %e, "Principal lookup failed during login");
            AuthError::Internal(e.to_string())
        })?;

        let Some(user) = user else {
            self.authenticator.verify_decoy(password);
            tracing::info!("Login rejected: unknown principal");
            return Err(AuthError::InvalidCredentials);
        };

        if !user.is_active {
            self.authenticator.verify_decoy(password);
            tracing::info!(user_id = %user.id, "Login rejected: inactive principal");
            return Err(AuthError::InvalidCredentials);
        }

        self.authenticator
            .authenticate(password, &user.password_hash, user.id, user.is_admin)
            .map(AccessToken::from)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::info!(user_id = %user.id, "Login rejected: password mismatch");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(error = %err, "Token generation failed");
                    AuthError::Internal(err.to_string())
                }
            })
    }

    async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a user id");
            AuthError::Unauthenticated
        })?;

        let user = self.repository.find_by_id(&user_id).await.map_err(|e| {
            tracing::error!(error = %e, "Principal lookup failed during token resolution");
            AuthError::Internal(e.to_string())
        })?;

        match user {
            Some(user) if user.is_active => Ok(user),
            Some(_) => {
                tracing::info!(user_id = %user_id, "Token subject is inactive");
                Err(AuthError::Unauthenticated)
            }
            None => {
                tracing::info!(user_id = %user_id, "Token subject no longer exists");
                Err(AuthError::Unauthenticated)
            }
        }
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = NewUser {
            email: command.email,
            name: command.name,
            telephone: command.telephone,
            role: DEFAULT_ROLE.to_string(),
            password_hash,
            is_admin: false,
            is_active: true,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created)
    }
}
