//! JWT Token Handler
//! Mission: Issue and verify signed, time-limited access tokens

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

/// Outcome of verifying a presented token.
///
/// Expiry is reported separately from all other verification failures so the
/// guard can surface it as its own 401 variant.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

/// JWT Handler for token operations
pub struct JwtHandler {
    secret: String,
    validity_hours: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with the signing secret.
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            validity_hours: 1, // fixed 1-hour validity window
        }
    }

    /// Issue a token for the given account email.
    pub fn issue_token(&self, email: &str) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::hours(self.validity_hours))
            .context("Invalid timestamp")?;

        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        debug!(
            "Issuing JWT for {}, expires in {}h",
            email, self.validity_hours
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign JWT")
    }

    /// Verify a token and extract its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        debug!("Verified JWT for {}", decoded.claims.sub);

        Ok(decoded.claims)
    }
}
