use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::{AuthError, TokenClaims, UserInfo};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// HS256 signing keys derived from `auth.jwt_secret`
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime_hours: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, lifetime_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime_hours,
        }
    }

    /// Access token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.lifetime_hours * 3600
    }

    pub fn generate_access_token(&self, user: &UserInfo) -> Result<String> {
        let now = Utc::now();
        let exp = (now + chrono::Duration::hours(self.lifetime_hours)).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            exp,
            iat,
        };

        encode(&Header::default(), &claims, &self.encoding).context("Failed to encode JWT token")
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("JWT rejected: {}", e);
                AuthError::InvalidToken
            })
    }
}

/// Refresh tokens are opaque uuids
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 256 random bits, base64
pub fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserInfo {
        UserInfo {
            id: "1".into(),
            email: "admin@demo.com".into(),
            full_name: Some("Admin".into()),
            is_admin: true,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let keys = JwtKeys::new("test-secret", 24);
        let token = keys.generate_access_token(&admin()).unwrap();
        let claims = keys.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "admin@demo.com");
        assert!(claims.is_admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let token = JwtKeys::new("one", 1).generate_access_token(&admin()).unwrap();
        assert_eq!(
            JwtKeys::new("two", 1).validate_token(&token).unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn test_generated_secret_is_32_bytes() {
        use base64::{engine::general_purpose, Engine as _};
        let secret = generate_jwt_secret();
        assert_eq!(general_purpose::STANDARD.decode(secret).unwrap().len(), 32);
        assert_ne!(generate_jwt_secret(), generate_jwt_secret());
    }
}
