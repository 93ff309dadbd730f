use auth::JwtError;
use thiserror::Error;

/// Failures of login and identity resolution.
///
/// `BadCredentials`, `InvalidToken` and `UnknownSubject` are all answered
/// with a generic 401; the variant only reaches the logs.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    BadCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("Token subject no longer exists: {0}")]
    UnknownSubject(String),

    #[error("Credential store error: {0}")]
    Store(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    /// Whether the caller simply failed to authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthError::BadCredentials | AuthError::InvalidToken(_) | AuthError::UnknownSubject(_)
        )
    }
}
