use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access token issued in demo mode
pub const DEMO_TOKEN: &str = "fake-jwt-token";

/// Shown verbatim in the login error banner
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user id
    pub email: String,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("invalid or expired refresh token")]
    InvalidRefreshToken,
}

impl LoginRequest {
    /// Both fields non-empty; the demo login checks nothing else
    pub fn is_filled(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_remember_defaults_off() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"admin@demo.com","password":"12345678"}"#).unwrap();
        assert!(!req.remember);
        assert!(req.is_filled());
    }

    #[test]
    fn test_whitespace_email_counts_as_filled() {
        let req = LoginRequest {
            email: "  ".into(),
            password: "x".into(),
            remember: false,
        };
        assert!(req.is_filled());
    }

    #[test]
    fn test_empty_fields_are_not_filled() {
        let req = LoginRequest {
            email: String::new(),
            password: "x".into(),
            remember: true,
        };
        assert!(!req.is_filled());
        let req = LoginRequest {
            email: "a@b.c".into(),
            password: String::new(),
            remember: false,
        };
        assert!(!req.is_filled());
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
