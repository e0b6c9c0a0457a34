use contracts::system::auth::{LoginResponse, UserInfo};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::SessionState;
use super::storage::LocalSessionStore;

/// Session context shared by the whole app.
///
/// All writes to the session go through these methods; API helpers call
/// [`AuthContext::expire`] on a 401.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    /// True while a stored token is being validated on load
    pub restoring: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            restoring: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user_info.clone())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    pub fn login(&self, response: LoginResponse, remember: bool) {
        log!("Logged in as {}", response.user.email);
        self.state
            .update(|s| s.begin(&LocalSessionStore, response, remember));
        self.schedule_refresh();
    }

    /// Validates the stored token via `/me`
    pub fn restore(&self) {
        let Some(token) = SessionState::stored_token(&LocalSessionStore) else {
            return;
        };
        let this = *self;
        this.restoring.set(true);
        spawn_local(async move {
            match api::get_current_user(&token).await {
                Ok(user) => {
                    log!("Session restored for {}", user.email);
                    this.state.update(|s| s.resume(token, user));
                }
                Err(e) => {
                    log!("Stored session rejected: {}", e);
                    this.state.update(|s| {
                        s.end(&LocalSessionStore);
                    });
                }
            }
            this.restoring.set(false);
        });
    }

    /// Refreshes the access token shortly before it expires
    fn schedule_refresh(&self) {
        let Some(delay) = self.state.with_untracked(|s| s.refresh_delay_ms()) else {
            return;
        };
        let token = self.token_untracked();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // a later login, refresh or logout owns the session now
            if this.token_untracked() != token {
                return;
            }
            let Some(refresh) = this.state.with_untracked(|s| s.refresh_token.clone()) else {
                return;
            };
            match api::refresh_token(refresh).await {
                Ok(response) => {
                    this.state
                        .update(|s| s.apply_refresh(&LocalSessionStore, response));
                    this.schedule_refresh();
                }
                Err(e) => {
                    log!("Token refresh failed: {}", e);
                    this.expire();
                }
            }
        });
    }

    pub fn logout(&self) {
        let refresh = self.state.with_untracked(|s| s.refresh_token.clone());
        self.state.update(|s| {
            s.end(&LocalSessionStore);
        });
        if let Some(refresh) = refresh {
            spawn_local(async move {
                if let Err(e) = api::logout(refresh).await {
                    log!("{}", e);
                }
            });
        }
    }

    /// The backend rejected the token
    pub fn expire(&self) {
        if self.state.with_untracked(|s| s.is_authenticated()) {
            log!("Session expired");
            self.state.update(|s| {
                s.end(&LocalSessionStore);
            });
        }
    }
}

/// Provides [`AuthContext`] and restores a remembered session on mount
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    auth.restore();

    children()
}

/// Hook to access the session
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
