use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Identity claims carried by an access token.
///
/// `is_admin` is a snapshot taken at issue time. Consumers that gate on
/// privileges should re-read the principal instead of trusting this flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Admin flag at issue time
    pub is_admin: bool,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Token identifier
    pub jti: String,
}

impl Claims {
    /// Create claims for a subject expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Unique principal identifier
    /// * `is_admin` - Admin flag to embed
    /// * `ttl` - Lifetime of the token
    pub fn for_subject(subject: impl ToString, is_admin: bool, ttl: Duration) -> Self {
        Self::issued_at(subject, is_admin, ttl, Utc::now())
    }

    /// Create claims for a subject issued at an explicit instant.
    pub fn issued_at(
        subject: impl ToString,
        is_admin: bool,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        let expiration = now + ttl;

        Self {
            sub: subject.to_string(),
            is_admin,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is only valid while `current_timestamp < exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
