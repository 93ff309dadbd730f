use std::str::FromStr;

use chrono::DateTime;
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
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler: issues and validates signed access tokens.
///
/// Only HMAC algorithms are accepted since the key is a shared secret.
/// The algorithm is fixed at construction; tokens signed with any other
/// algorithm are rejected as badly signed.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        Self::with_algorithm(secret, "HS256")
    }

    /// Create a new JWT handler with a named HMAC algorithm.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `algorithm` - One of `HS256`, `HS384`, `HS512`
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC algorithm name
    pub fn with_algorithm(secret: &[u8], algorithm: &str) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        let algorithm = match Algorithm::from_str(algorithm) {
            Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => alg,
            _ => return Err(JwtError::UnsupportedAlgorithm(algorithm.to_string())),
        };

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Signing algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry out of range or signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token for `subject` as if it were `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        self.encode(&Claims::for_subject(subject, now, ttl)?)
    }

    /// Verify the signature of a token and deserialize its claims.
    ///
    /// No time-based checks happen here; see [`JwtHandler::validate`].
    ///
    /// # Errors
    /// * `BadSignature` - Signature or algorithm does not match
    /// * `MalformedClaims` - Token cannot be parsed into `T`
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::BadSignature
                }
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::MalformedClaims(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return its subject.
    pub fn validate(&self, token: &str) -> Result<String, JwtError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate an access token against the instant `now`.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not verify with this handler's key
    /// * `Expired` - `exp` is at or before `now`
    /// * `MalformedClaims` - Undecodable token or absent/empty subject
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims: Claims = self.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        claims
            .subject()
            .map(str::to_string)
            .ok_or_else(|| JwtError::MalformedClaims("missing subject".to_string()))
    }
}
