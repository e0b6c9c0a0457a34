//! Session lifecycle: login, restore, refresh, logout and expire.
//!
//! The state lives in a signal owned by the auth context; every transition
//! goes through the methods here so the persisted keys stay consistent.

use contracts::system::auth::{LoginResponse, RefreshResponse, UserInfo};

use super::storage::{SessionStore, REMEMBER_KEY, TOKEN_KEY};

/// Refresh this many seconds before the access token expires
pub const REFRESH_MARGIN_SECS: i64 = 60;
/// Browsers clamp longer timeouts
const MAX_TIMER_MS: i64 = i32::MAX as i64;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    /// Kept in memory only
    pub refresh_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Lifetime of the current access token in seconds
    pub expires_in: Option<i64>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Successful login. The token is always persisted; `remember` is
    /// written as `"true"` or removed.
    pub fn begin(&mut self, store: &impl SessionStore, response: LoginResponse, remember: bool) {
        store.set(TOKEN_KEY, &response.access_token);
        if remember {
            store.set(REMEMBER_KEY, "true");
        } else {
            store.remove(REMEMBER_KEY);
        }
        *self = SessionState {
            access_token: Some(response.access_token),
            refresh_token: Some(response.refresh_token),
            user_info: Some(response.user),
            expires_in: Some(response.expires_in),
        };
    }

    /// Token to validate on load. A session that was not remembered is
    /// dropped instead of restored.
    pub fn stored_token(store: &impl SessionStore) -> Option<String> {
        let token = store.get(TOKEN_KEY)?;
        if store.get(REMEMBER_KEY).as_deref() == Some("true") {
            Some(token)
        } else {
            store.remove(TOKEN_KEY);
            None
        }
    }

    /// The stored token was accepted by `/me`
    pub fn resume(&mut self, token: String, user: UserInfo) {
        *self = SessionState {
            access_token: Some(token),
            refresh_token: None,
            user_info: Some(user),
            expires_in: None,
        };
    }

    pub fn apply_refresh(&mut self, store: &impl SessionStore, response: RefreshResponse) {
        store.set(TOKEN_KEY, &response.access_token);
        self.access_token = Some(response.access_token);
        self.expires_in = Some(response.expires_in);
    }

    /// Logout or expiry. Returns the refresh token so it can be revoked.
    pub fn end(&mut self, store: &impl SessionStore) -> Option<String> {
        store.remove(TOKEN_KEY);
        store.remove(REMEMBER_KEY);
        let refresh_token = self.refresh_token.take();
        *self = SessionState::default();
        refresh_token
    }

    /// Delay before the scheduled refresh, if the token has a known lifetime
    pub fn refresh_delay_ms(&self) -> Option<u32> {
        refresh_delay_ms(self.expires_in?)
    }
}

pub fn refresh_delay_ms(expires_in: i64) -> Option<u32> {
    if expires_in <= 0 {
        return None;
    }
    let lead = (expires_in - REFRESH_MARGIN_SECS).max(expires_in / 2);
    Some(lead.saturating_mul(1000).clamp(1000, MAX_TIMER_MS) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemorySessionStore;
    use contracts::system::auth::DEMO_TOKEN;

    fn response() -> LoginResponse {
        LoginResponse {
            access_token: DEMO_TOKEN.into(),
            refresh_token: "r-1".into(),
            expires_in: 86_400,
            user: UserInfo {
                id: "1".into(),
                email: "admin@demo.com".into(),
                full_name: Some("Admin".into()),
                is_admin: true,
            },
        }
    }

    #[test]
    fn test_login_with_remember_writes_both_keys() {
        let store = MemorySessionStore::default();
        let mut session = SessionState::default();
        session.begin(&store, response(), true);

        assert!(session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(DEMO_TOKEN));
        assert_eq!(store.get(REMEMBER_KEY).as_deref(), Some("true"));
        assert_eq!(store.keys(), vec!["remember", "token"]);
    }

    #[test]
    fn test_login_without_remember_removes_flag() {
        let store = MemorySessionStore::default();
        store.set(REMEMBER_KEY, "true");
        let mut session = SessionState::default();
        session.begin(&store, response(), false);

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(DEMO_TOKEN));
        assert_eq!(store.get(REMEMBER_KEY), None);
        assert_eq!(store.keys(), vec!["token"]);
    }

    #[test]
    fn test_restore_only_remembered_sessions() {
        let store = MemorySessionStore::default();
        let mut session = SessionState::default();
        session.begin(&store, response(), true);
        assert_eq!(SessionState::stored_token(&store).as_deref(), Some(DEMO_TOKEN));

        let store = MemorySessionStore::default();
        session.begin(&store, response(), false);
        assert_eq!(SessionState::stored_token(&store), None);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_resume_keeps_user() {
        let mut session = SessionState::default();
        session.resume(DEMO_TOKEN.into(), response().user);
        assert!(session.is_authenticated());
        assert_eq!(session.refresh_token, None);
        assert_eq!(session.refresh_delay_ms(), None);
    }

    #[test]
    fn test_refresh_replaces_token() {
        let store = MemorySessionStore::default();
        let mut session = SessionState::default();
        session.begin(&store, response(), true);
        session.apply_refresh(
            &store,
            RefreshResponse {
                access_token: "next".into(),
                expires_in: 3600,
            },
        );
        assert_eq!(session.access_token.as_deref(), Some("next"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("next"));
        assert_eq!(session.refresh_token.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_end_clears_everything() {
        let store = MemorySessionStore::default();
        let mut session = SessionState::default();
        session.begin(&store, response(), true);

        assert_eq!(session.end(&store).as_deref(), Some("r-1"));
        assert_eq!(session, SessionState::default());
        assert!(store.keys().is_empty());
        assert_eq!(session.end(&store), None);
    }

    #[test]
    fn test_refresh_delay() {
        assert_eq!(refresh_delay_ms(3600), Some(3_540_000));
        assert_eq!(refresh_delay_ms(90), Some(45_000));
        assert_eq!(refresh_delay_ms(1), Some(1000));
        assert_eq!(refresh_delay_ms(0), None);
        assert_eq!(refresh_delay_ms(90 * 86_400), Some(i32::MAX as u32));
    }
}
