use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use contracts::system::auth::{AuthError, UserInfo};
use tokio::sync::RwLock;

use super::jwt::generate_refresh_token;

struct RefreshEntry {
    user: UserInfo,
    expires_at: DateTime<Utc>,
}

/// Issued refresh tokens, keyed by their sha256. Lost on restart.
pub struct RefreshTokenStore {
    entries: RwLock<HashMap<String, RefreshEntry>>,
    lifetime: Duration,
}

impl RefreshTokenStore {
    pub fn new(lifetime_days: i64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            lifetime: Duration::days(lifetime_days),
        }
    }

    pub async fn issue(&self, user: &UserInfo) -> String {
        let token = generate_refresh_token();
        let entry = RefreshEntry {
            user: user.clone(),
            expires_at: Utc::now() + self.lifetime,
        };
        self.entries.write().await.insert(hash_token(&token), entry);
        token
    }

    /// User the token was issued to. Expired tokens are dropped.
    pub async fn lookup(&self, token: &str) -> Result<UserInfo, AuthError> {
        let key = hash_token(token);
        let mut entries = self.entries.write().await;
        match entries.get(&key) {
            Some(entry) if entry.expires_at > Utc::now() => Ok(entry.user.clone()),
            Some(_) => {
                entries.remove(&key);
                Err(AuthError::InvalidRefreshToken)
            }
            None => Err(AuthError::InvalidRefreshToken),
        }
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.entries.write().await.remove(&hash_token(token)).is_some()
    }
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "1".into(),
            email: "admin@demo.com".into(),
            full_name: None,
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn test_issue_lookup_revoke() {
        let store = RefreshTokenStore::new(90);
        let token = store.issue(&user()).await;
        assert_eq!(store.lookup(&token).await.unwrap(), user());
        assert!(store.revoke(&token).await);
        assert_eq!(
            store.lookup(&token).await.unwrap_err(),
            AuthError::InvalidRefreshToken
        );
        assert!(!store.revoke(&token).await);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let store = RefreshTokenStore::new(-1);
        let token = store.issue(&user()).await;
        assert!(store.lookup(&token).await.is_err());
    }

    #[test]
    fn test_only_hash_is_kept() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_ne!(hash, "abc");
    }
}
