use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::{AuthError, TokenClaims};

use crate::shared::error::ApiError;

/// Claims of the authenticated caller, set by `require_auth`.
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser)`
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(ApiError::Auth(AuthError::MissingToken))
    }
}
