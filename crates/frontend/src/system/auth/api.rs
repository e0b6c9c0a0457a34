//! Calls to `/api/system/auth/*`. These run before or outside a session,
//! so they do not go through `shared::api` and never expire it.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_url, response_error};

const AUTH_BASE: &str = "/api/system/auth";

async fn send_json<B: Serialize>(endpoint: &str, body: &B) -> Result<Response, String> {
    let response = Request::post(&api_url(&format!("{}/{}", AUTH_BASE, endpoint)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if response.ok() {
        Ok(response)
    } else {
        Err(response_error(response).await)
    }
}

async fn parse<R: DeserializeOwned>(response: Response) -> Result<R, String> {
    response
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// The error is the backend's message, shown verbatim on the login page
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    parse(send_json("login", request).await?).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    parse(send_json("refresh", &RefreshRequest { refresh_token }).await?).await
}

/// Revokes the refresh token on the backend
pub async fn logout(refresh_token: String) -> Result<(), String> {
    send_json("logout", &RefreshRequest { refresh_token }).await.map(|_| ())
}

/// Validates a stored access token
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url(&format!("{}/me", AUTH_BASE)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    parse(response).await
}
