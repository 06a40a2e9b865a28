use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Top-level error for user account operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Authentication and authorization failures.
///
/// Messages are fixed so that no variant reveals whether an email exists,
/// why a token was rejected, or what the store reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, wrong password or disabled account at login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, expired, tampered token, or one whose principal is gone.
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Valid identity without the required privilege.
    #[error("Admin privileges required")]
    Forbidden,

    /// Valid identity that neither owns the record nor is an admin.
    #[error("Not allowed to modify this record")]
    NotOwner,

    /// Store or token-signing failure; the detail is for logs only.
    #[error("Authentication failed")]
    Internal(String),
}
