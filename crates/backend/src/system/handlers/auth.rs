use axum::extract::{Json, State};
use axum::http::StatusCode;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    state.auth.login(&request).await.map(Json)
}

/// Refresh token handler
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    state.auth.refresh(&request.refresh_token).await.map(Json)
}

/// Logout handler; unknown tokens are ignored
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> StatusCode {
    state.auth.logout(&request.refresh_token).await;
    StatusCode::OK
}

/// Current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: claims.sub,
        email: claims.email,
        full_name: Some("Admin".into()),
        is_admin: claims.is_admin,
    })
}
