use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Lifetime of an access token when none is configured.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT token handler for issuing and decoding access tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a single server-wide secret.
/// The secret and token lifetime are fixed at construction.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 and a 24 hour token lifetime
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Override the lifetime of issued tokens.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Lifetime applied by [`JwtHandler::issue`].
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a subject using the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString, is_admin: bool) -> Result<String, JwtError> {
        self.issue_with_ttl(subject, is_admin, self.ttl)
    }

    /// Issue a token for a subject expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(
        &self,
        subject: impl ToString,
        is_admin: bool,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, is_admin, ttl))
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature must match and the current time must be strictly before
    /// `exp`. No clock leeway is granted.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, malformed token or expired token
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "expired",
                ErrorKind::InvalidSignature => "signature mismatch",
                _ => "malformed",
            };
            tracing::debug!(reason, error = %e, "Token rejected");
            JwtError::Invalid
        })?;

        if token_data.claims.is_expired(Utc::now().timestamp()) {
            tracing::debug!(reason = "expired", "Token rejected");
            return Err(JwtError::Invalid);
        }

        Ok(token_data.claims)
    }
}
