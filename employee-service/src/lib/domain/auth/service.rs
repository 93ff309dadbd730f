use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::JwtError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Identity;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::employee::models::EmailAddress;

/// Login and identity resolution over a credential store.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// # Arguments
    /// * `store` - Credential lookup by email
    /// * `authenticator` - Process-wide hasher and token configuration
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        // A malformed identifier cannot match anybody; treat it as unknown.
        let record = match EmailAddress::new(command.username) {
            Ok(email) => self.store.find_credentials(&email).await?,
            Err(_) => None,
        };

        let (subject, stored_hash) = match &record {
            Some(record) => (
                record.identity.email.to_string(),
                Some(record.password_hash.as_str().to_string()),
            ),
            None => (String::new(), None),
        };
        let known_account = stored_hash.is_some();

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, stored_hash.as_deref(), &subject)
        })
        .await
        .map_err(|e| AuthError::Unknown(format!("Password verification task failed: {}", e)))?;

        match outcome {
            Ok(result) => {
                tracing::info!(employee_id = ?record.map(|r| r.identity.id.0), "Access token issued");
                Ok(AccessToken {
                    access_token: result.access_token,
                    token_type: result.token_type.to_string(),
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(known_account, "Login rejected");
                Err(AuthError::BadCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => Err(AuthError::Unknown(e.to_string())),
            Err(AuthenticationError::JwtError(e)) => {
                Err(AuthError::Unknown(format!("Token generation failed: {}", e)))
            }
        }
    }

    async fn resolve(&self, token: &str) -> Result<Identity, AuthError> {
        let subject = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(reason = %e, "Access token rejected");
            AuthError::InvalidToken(e)
        })?;

        let email = EmailAddress::new(subject.clone()).map_err(|e| {
            tracing::warn!(reason = %e, "Access token subject is not an email");
            AuthError::InvalidToken(JwtError::MalformedClaims(e.to_string()))
        })?;

        match self.store.find_credentials(&email).await? {
            Some(record) => Ok(record.into_identity()),
            None => {
                tracing::warn!(subject = %subject, "Access token subject no longer exists");
                Err(AuthError::UnknownSubject(subject))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtHandler;
    use chrono::Duration;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::auth::models::CredentialRecord;
    use crate::domain::employee::models::Employee;
    use crate::domain::employee::models::EmployeeId;
    use crate::domain::employee::models::PasswordHash;
    use crate::domain::employee::models::PersonName;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn find_credentials(&self, email: &EmailAddress) -> Result<Option<CredentialRecord>, AuthError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(
            JwtHandler::new(SECRET).unwrap(),
            Duration::minutes(30),
        ))
    }

    fn record(email: &str, password: &str) -> CredentialRecord {
        let hash = auth::PasswordHasher::new().hash(password).unwrap();
        CredentialRecord::from(Employee {
            id: EmployeeId(1),
            name: PersonName::new("Ada".to_string()).unwrap(),
            surname: PersonName::new("Lovelace".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            age: 36,
            working_hours: 40,
            password_hash: PasswordHash::new(hash),
        })
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut store = MockTestCredentialStore::new();
        let stored = record("a@x.com", "pass_word!");
        store
            .expect_find_credentials()
            .withf(|email| email.as_str() == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let authenticator = authenticator();
        let service = AuthService::new(Arc::new(store), Arc::clone(&authenticator));

        let token = service.login(login("a@x.com", "pass_word!")).await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(
            authenticator.validate_token(&token.access_token).unwrap(),
            "a@x.com"
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_alike() {
        let mut store = MockTestCredentialStore::new();
        let stored = record("a@x.com", "pass_word!");
        store
            .expect_find_credentials()
            .withf(|email| email.as_str() == "a@x.com")
            .returning(move |_| Ok(Some(stored.clone())));
        store
            .expect_find_credentials()
            .withf(|email| email.as_str() == "nobody@x.com")
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(store), authenticator());

        let wrong_password = service.login(login("a@x.com", "nope")).await.unwrap_err();
        let unknown_email = service
            .login(login("nobody@x.com", "pass_word!"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::BadCredentials));
        assert!(matches!(unknown_email, AuthError::BadCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_with_malformed_username_skips_lookup() {
        let mut store = MockTestCredentialStore::new();
        store.expect_find_credentials().times(0);

        let service = AuthService::new(Arc::new(store), authenticator());

        let result = service.login(login("not-an-email", "pass_word!")).await;
        assert!(matches!(result, Err(AuthError::BadCredentials)));
    }

    #[tokio::test]
    async fn test_login_store_failure() {
        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_credentials()
            .returning(|_| Err(AuthError::Store("connection reset".to_string())));

        let service = AuthService::new(Arc::new(store), authenticator());

        let result = service.login(login("a@x.com", "pass_word!")).await;
        assert!(matches!(result, Err(AuthError::Store(_))));
        assert!(!result.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_resolve_returns_identity() {
        let mut store = MockTestCredentialStore::new();
        let stored = record("a@x.com", "pass_word!");
        store
            .expect_find_credentials()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let authenticator = authenticator();
        let token = authenticator.issue_token("a@x.com").unwrap();
        let service = AuthService::new(Arc::new(store), authenticator);

        let identity = service.resolve(&token).await.unwrap();
        assert_eq!(identity.email.as_str(), "a@x.com");
        assert_eq!(identity.id, EmployeeId(1));
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject() {
        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_credentials()
            .times(1)
            .returning(|_| Ok(None));

        let authenticator = authenticator();
        let token = authenticator.issue_token("gone@x.com").unwrap();
        let service = AuthService::new(Arc::new(store), authenticator);

        let result = service.resolve(&token).await;
        assert!(matches!(result, Err(AuthError::UnknownSubject(_))));
        assert!(result.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_resolve_rejects_bad_tokens_before_lookup() {
        let mut store = MockTestCredentialStore::new();
        store.expect_find_credentials().times(0);

        let service = AuthService::new(Arc::new(store), authenticator());

        let expired = JwtHandler::new(SECRET)
            .unwrap()
            .issue_at("a@x.com", Duration::minutes(30), Utc::now() - Duration::hours(1))
            .unwrap();
        let foreign = JwtHandler::new(b"some-other-secret-of-sufficient-length!")
            .unwrap()
            .issue("a@x.com", Duration::minutes(30))
            .unwrap();

        assert!(matches!(
            service.resolve(&expired).await,
            Err(AuthError::InvalidToken(JwtError::Expired))
        ));
        assert!(matches!(
            service.resolve(&foreign).await,
            Err(AuthError::InvalidToken(JwtError::BadSignature))
        ));
        assert!(matches!(
            service.resolve("garbage").await,
            Err(AuthError::InvalidToken(JwtError::MalformedClaims(_)))
        ));
    }
}
