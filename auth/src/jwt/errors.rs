use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are deliberately collapsed into [`JwtError::Invalid`]:
/// callers cannot tell an expired token from a forged or garbled one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    Invalid,
}
