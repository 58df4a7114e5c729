use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use standard_error::{StandardError, Status};

use crate::{
    pkg::{internal::auth::verify_token, server::state::AppState},
    prelude::Result,
};

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Lets the request through only with a valid bearer token whose claims mark
/// an admin. The verified claims are attached to the request.
pub async fn require_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    match bearer_token(&headers).map(|token| verify_token(token, &state.secret_key)) {
        Some(Ok(claims)) if claims.is_admin => {
            request.extensions_mut().insert(Arc::new(claims));
            return Ok(next.run(request).await);
        }
        Some(Ok(claims)) => {
            tracing::warn!("{} is not an admin, authorization denied", claims.username)
        }
        Some(Err(_)) => tracing::warn!("invalid token, authorization denied"),
        None => tracing::warn!("token missing, authorization denied"),
    }
    Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))
}
