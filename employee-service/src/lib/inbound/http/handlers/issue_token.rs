use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Exchange form-encoded credentials for a bearer token.
///
/// Answers with the bare OAuth2 token shape rather than the response
/// envelope, so standard password-flow clients can read it.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    state
        .auth_service
        .login(LoginCommand {
            username: form.username,
            password: form.password,
        })
        .await
        .map_err(ApiError::from)
        .map(|token| Json(token.into()))
}

/// Password-flow form; `username` carries the email.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}
