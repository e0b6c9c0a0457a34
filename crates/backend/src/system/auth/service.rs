use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use contracts::system::auth::{
    AuthError, LoginRequest, LoginResponse, RefreshResponse, TokenClaims, UserInfo, DEMO_TOKEN,
};
use tokio::sync::RwLock;

use super::jwt::JwtKeys;
use super::password::verify_password;
use super::refresh::RefreshTokenStore;
use crate::shared::config::{AuthConfig, AuthMode};
use crate::shared::error::ApiError;

/// Login backend selected by `auth.mode`
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Claims of a bearer token
    async fn validate(&self, token: &str) -> Result<TokenClaims, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError>;

    async fn logout(&self, refresh_token: &str);
}

pub fn from_config(config: &AuthConfig) -> Arc<dyn Authenticator> {
    match config.mode {
        AuthMode::Demo => Arc::new(DemoAuthenticator::new(config)),
        AuthMode::Jwt => Arc::new(JwtAuthenticator::new(config)),
    }
}

fn admin_user(email: &str) -> UserInfo {
    UserInfo {
        id: "1".into(),
        email: email.trim().to_string(),
        full_name: Some("Admin".into()),
        is_admin: true,
    }
}

/// Accepts any non-empty credentials after a fixed delay and hands out
/// the fixed demo token.
pub struct DemoAuthenticator {
    delay: Duration,
    /// Tokens last for a day in demo mode
    expires_in: i64,
    current: RwLock<UserInfo>,
    refresh_tokens: RefreshTokenStore,
}

impl DemoAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.login_delay_ms),
            expires_in: config.access_token_hours * 3600,
            current: RwLock::new(admin_user(&config.admin_email)),
            refresh_tokens: RefreshTokenStore::new(config.refresh_token_days),
        }
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        tokio::time::sleep(self.delay).await;

        if !request.is_filled() {
            tracing::warn!("Demo login rejected: empty credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = admin_user(&request.email);
        *self.current.write().await = user.clone();
        let refresh_token = self.refresh_tokens.issue(&user).await;
        tracing::info!("Demo login: {} (remember: {})", user.email, request.remember);

        Ok(LoginResponse {
            access_token: DEMO_TOKEN.to_string(),
            refresh_token,
            expires_in: self.expires_in,
            user,
        })
    }

    async fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        if token != DEMO_TOKEN {
            return Err(AuthError::InvalidToken);
        }
        let user = self.current.read().await;
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            exp: (now + self.expires_in) as usize,
            iat: now as usize,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        self.refresh_tokens.lookup(refresh_token).await?;
        Ok(RefreshResponse {
            access_token: DEMO_TOKEN.to_string(),
            expires_in: self.expires_in,
        })
    }

    async fn logout(&self, refresh_token: &str) {
        self.refresh_tokens.revoke(refresh_token).await;
    }
}

/// Single admin account with an argon2 password and HS256 access tokens
pub struct JwtAuthenticator {
    admin_email: String,
    password_hash: String,
    keys: JwtKeys,
    refresh_tokens: RefreshTokenStore,
}

impl JwtAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            admin_email: config.admin_email.trim().to_lowercase(),
            password_hash: config.admin_password_hash.clone(),
            keys: JwtKeys::new(&config.jwt_secret, config.access_token_hours),
            refresh_tokens: RefreshTokenStore::new(config.refresh_token_days),
        }
    }

    fn verify(&self, request: &LoginRequest) -> Result<bool, ApiError> {
        if !request.is_filled() || request.email.trim().to_lowercase() != self.admin_email {
            return Ok(false);
        }
        Ok(verify_password(&request.password, &self.password_hash)?)
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        if !self.verify(request)? {
            tracing::warn!("Login rejected for '{}'", request.email.trim());
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = admin_user(&self.admin_email);
        let access_token = self.keys.generate_access_token(&user)?;
        let refresh_token = self.refresh_tokens.issue(&user).await;
        tracing::info!("Login: {}", user.email);

        Ok(LoginResponse {
            access_token,
            refresh_token,
            expires_in: self.keys.expires_in(),
            user,
        })
    }

    async fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.keys.validate_token(token)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let user = self.refresh_tokens.lookup(refresh_token).await?;
        Ok(RefreshResponse {
            access_token: self.keys.generate_access_token(&user)?,
            expires_in: self.keys.expires_in(),
        })
    }

    async fn logout(&self, refresh_token: &str) {
        self.refresh_tokens.revoke(refresh_token).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::system::auth::password::hash_password;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
            remember: false,
        }
    }

    fn demo_config() -> AuthConfig {
        let mut config = default_config().unwrap().auth;
        config.login_delay_ms = 0;
        config
    }

    fn jwt_config() -> AuthConfig {
        let mut config = demo_config();
        config.mode = AuthMode::Jwt;
        config.jwt_secret = "test-secret".into();
        config.admin_password_hash = hash_password("12345678").unwrap();
        config
    }

    #[tokio::test]
    async fn test_demo_login_issues_fixed_token() {
        let auth = DemoAuthenticator::new(&demo_config());
        let response = auth.login(&request("ops@instafix.test", "x")).await.unwrap();
        assert_eq!(response.access_token, DEMO_TOKEN);
        assert_eq!(response.user.email, "ops@instafix.test");

        let claims = auth.validate(DEMO_TOKEN).await.unwrap();
        assert_eq!(claims.email, "ops@instafix.test");
        assert_eq!(
            auth.validate("other").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn test_demo_login_rejects_empty_password() {
        let auth = DemoAuthenticator::new(&demo_config());
        let err = auth.login(&request("admin@demo.com", "")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_demo_login_accepts_any_non_empty_email() {
        let auth = DemoAuthenticator::new(&demo_config());
        let response = auth.login(&request(" ", "x")).await.unwrap();
        assert_eq!(response.access_token, DEMO_TOKEN);
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_login_waits_for_delay() {
        let mut config = demo_config();
        config.login_delay_ms = 1200;
        let auth = DemoAuthenticator::new(&config);
        let started = tokio::time::Instant::now();
        auth.login(&request("admin@demo.com", "12345678")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn test_demo_refresh_and_logout() {
        let auth = DemoAuthenticator::new(&demo_config());
        let login = auth.login(&request("admin@demo.com", "12345678")).await.unwrap();
        let refreshed = auth.refresh(&login.refresh_token).await.unwrap();
        assert_eq!(refreshed.access_token, DEMO_TOKEN);

        auth.logout(&login.refresh_token).await;
        assert!(auth.refresh(&login.refresh_token).await.is_err());
    }

    #[tokio::test]
    async fn test_jwt_login_checks_email_and_password() {
        let auth = JwtAuthenticator::new(&jwt_config());
        assert!(auth.login(&request("admin@demo.com", "wrong")).await.is_err());
        assert!(auth.login(&request("other@demo.com", "12345678")).await.is_err());

        let response = auth.login(&request(" Admin@Demo.com ", "12345678")).await.unwrap();
        assert_ne!(response.access_token, DEMO_TOKEN);
        assert_eq!(response.expires_in, 24 * 3600);
        let claims = auth.validate(&response.access_token).await.unwrap();
        assert_eq!(claims.email, "admin@demo.com");
        assert!(auth.validate(DEMO_TOKEN).await.is_err());
    }

    #[tokio::test]
    async fn test_jwt_refresh_issues_valid_token() {
        let auth = JwtAuthenticator::new(&jwt_config());
        let login = auth.login(&request("admin@demo.com", "12345678")).await.unwrap();
        let refreshed = auth.refresh(&login.refresh_token).await.unwrap();
        assert!(auth.validate(&refreshed.access_token).await.is_ok());
        assert!(matches!(
            auth.refresh("unknown").await,
            Err(ApiError::Auth(AuthError::InvalidRefreshToken))
        ));
    }
}
