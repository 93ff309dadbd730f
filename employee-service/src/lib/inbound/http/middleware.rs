use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_CREDENTIALS;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the bearer token to an `Identity` and stores it
/// in request extensions. Every rejection reads the same to the client.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Owned: the request body is not Sync, so no borrow of it may cross the await.
    let token = extract_bearer_token(&req)?.to_string();

    let identity = state.auth_service.resolve(&token).await.map_err(|e| {
        if !e.is_unauthorized() {
            tracing::error!(error = %e, "Identity lookup failed");
        }
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let rejected = |reason: &str| {
        tracing::warn!(reason, "Authorization header rejected");
        ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
    };

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| rejected("missing"))?
        .to_str()
        .map_err(|_| rejected("not visible ASCII"))?;

    match header.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(rejected("expected Bearer <token>")),
    }
}
