use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Access token claims.
///
/// `exp` and `iat` are mandatory: a token without them does not
/// deserialize. The subject is optional on the wire so that a missing one
/// can be reported as malformed claims rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (employee email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` from `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Identifier the token asserts
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiry falls outside the representable range
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("Token lifetime out of range: {}", ttl))
        })?;

        Ok(Self {
            sub: Some(subject.to_string()),
            exp: expiration.timestamp(),
            iat: issued_at.timestamp(),
        })
    }

    /// Non-empty subject, if any.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }

    /// Check if token is expired.
    ///
    /// The expiry instant itself already counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
