use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::shared::state::AppState;
use crate::system::{auth, handlers};

/// Health check and `/api/system/auth/*`
pub fn configure_system_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Public
        .route("/api/system/auth/login", post(handlers::auth::login))
        .route("/api/system/auth/refresh", post(handlers::auth::refresh))
        .route("/api/system/auth/logout", post(handlers::auth::logout))
        // Protected
        .route(
            "/api/system/auth/me",
            get(handlers::auth::current_user).layer(middleware::from_fn_with_state(
                state.clone(),
                auth::middleware::require_auth,
            )),
        )
        .with_state(state)
}
