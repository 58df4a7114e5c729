use axum::http::StatusCode;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp};
use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError, Status};

use crate::prelude::Result;

const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub is_admin: bool,
    pub exp: u64,
}

pub fn issue_token(username: &str, is_admin: bool, secret: &str) -> Result<String> {
    let claims = Claims {
        username: username.to_string(),
        is_admin,
        exp: get_current_timestamp() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| StandardError::new("ERR-AUTH-002").interpolate_err(e.to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("invalid token: {}", e);
        StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED)
    })
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn test_issue_and_verify() -> Result<()> {
        let token = issue_token("u4", true, "sekrit")?;
        let claims = verify_token(&token, "sekrit")?;
        assert_eq!(claims.username, "u4");
        assert!(claims.is_admin);
        assert!(claims.exp > get_current_timestamp());
        Ok(())
    }

    #[test]
    fn test_verify_rejects_wrong_secret() -> Result<()> {
        let token = issue_token("u1", false, "sekrit")?;
        assert!(verify_token(&token, "other").is_err());
        assert!(verify_token("not-a-jwt", "sekrit").is_err());
        Ok(())
    }
}
