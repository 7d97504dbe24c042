//! Authentication Models
//! Mission: Define the account and token data structures

use serde::{Deserialize, Serialize};

/// A login account. The credential store seeds exactly one of these at
/// startup and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (account email)
    pub iat: usize,  // issued-at timestamp
    pub exp: usize,  // expiration timestamp
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_never_serializes_hash() {
        let account = Account {
            email: "demo@minimals.cc".to_string(),
            password_hash: "$2b$10$secret".to_string(),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("demo@minimals.cc"));
        assert!(!json.contains("$2b$10$secret"));
    }

    #[test]
    fn test_login_request_deserialization() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"demo@minimals.cc","password":"@demo1"}"#).unwrap();
        assert_eq!(req.email, "demo@minimals.cc");
        assert_eq!(req.password, "@demo1");
    }
}
