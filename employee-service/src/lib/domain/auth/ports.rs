use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::CredentialRecord;
use crate::domain::auth::models::Identity;
use crate::domain::auth::models::LoginCommand;
use crate::domain::employee::models::EmailAddress;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Errors
    /// * `BadCredentials` - Unknown email or wrong password
    /// * `Store` - Credential lookup failed
    /// * `Unknown` - Hashing task or token signing failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Turn a presented bearer token into the identity it belongs to.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, expiry or claims check failed
    /// * `UnknownSubject` - Token is valid but its employee is gone
    /// * `Store` - Credential lookup failed
    async fn resolve(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Read access to stored credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Credential record for an email, `None` when nobody has it.
    async fn find_credentials(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, AuthError>;
}
