use thiserror::Error;

/// Error type for JWT operations.
///
/// The validation variants are diagnostic detail. Callers facing a client
/// should collapse them into a single "not authenticated" answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token claims are malformed: {0}")]
    MalformedClaims(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Token lifetime must be a positive number of minutes, got {0}")]
    InvalidLifetime(i64),
}
