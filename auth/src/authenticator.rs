use chrono::Duration;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type label returned alongside every access token.
pub const TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Holds the process-wide signing configuration. Build it once at startup
/// and share it; it is never mutated afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Always [`TOKEN_TYPE`]
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_handler` - Configured token handler
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(jwt_handler: JwtHandler, token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            token_ttl,
        }
    }

    /// Lifetime of issued access tokens.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// `stored_hash` is `None` when no account matched the identifier. A
    /// verification still runs in that case so both failures cost the same.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash of the account, if any
    /// * `subject` - Identifier to put in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown account or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                self.password_hasher.verify_dummy(password);
                false
            }
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: TOKEN_TYPE,
        })
    }

    /// Issue an access token without password verification.
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject, self.token_ttl)
    }

    /// Validate an access token and return its subject.
    ///
    /// # Errors
    /// * `JwtError` - Signature, expiry or claims check failed
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        let handler = JwtHandler::new(b"test_secret_key_at_least_32_bytes!").unwrap();
        Authenticator::new(handler, Duration::minutes(30))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, Some(&hash), "a@x.com")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.token_type, "bearer");

        let subject = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(subject, "a@x.com");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", Some(&hash), "a@x.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_unknown_account() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", None, "ghost@x.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_stored_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", Some("not-a-phc-string"), "a@x.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issued_token_uses_configured_ttl() {
        let authenticator = authenticator();
        assert_eq!(authenticator.token_ttl(), Duration::minutes(30));

        let token = authenticator.issue_token("a@x.com").unwrap();
        let handler = JwtHandler::new(b"test_secret_key_at_least_32_bytes!").unwrap();
        let claims: crate::jwt::Claims = handler.decode(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
