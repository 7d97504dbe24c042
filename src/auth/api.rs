//! Authentication API Endpoints
//! Mission: Provide the login entry point

use crate::auth::{
    credentials::CredentialStore,
    jwt::JwtHandler,
    models::{LoginRequest, LoginResponse},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<CredentialStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

/// Login endpoint - POST /login
///
/// The bcrypt comparison runs on the blocking pool; it is the only
/// suspension point on this path.
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    info!("🔐 Login attempt: {}", payload.email);

    let credentials = state.credentials.clone();
    let LoginRequest { email, password } = payload;

    let check_email = email.clone();
    let valid = tokio::task::spawn_blocking(move || {
        credentials.verify_password(&check_email, &password)
    })
    .await
    .map_err(|_| AuthApiError::InternalError)?
    .map_err(|_| AuthApiError::InternalError)?;

    if !valid {
        warn!("❌ Failed login attempt: {}", email);
        return Err(AuthApiError::InvalidCredentials);
    }

    let token = state
        .jwt_handler
        .issue_token(&email)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("✅ Login successful: {}", email);

    Ok(Json(LoginResponse { token }))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    InvalidCredentials,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Same message whether the email or the password mismatched.
            AuthApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            AuthApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_api_error_responses() {
        let invalid_creds = AuthApiError::InvalidCredentials.into_response();
        assert_eq!(invalid_creds.status(), StatusCode::UNAUTHORIZED);

        let internal = AuthApiError::InternalError.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
