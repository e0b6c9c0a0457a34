//! Authenticated calls to the business API.
//!
//! Every request carries the session's bearer token. A 401 expires the
//! session, which sends the operator back to the login page.

use contracts::shared::actions::{ActionParams, ActionRequest};
use contracts::shared::listing::{ListQuery, Paginated};
use contracts::shared::metadata::Stored;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{api_url, response_error, with_query};
use crate::system::auth::AuthContext;

fn authorized(builder: RequestBuilder, auth: AuthContext) -> RequestBuilder {
    match auth.token_untracked() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn checked(response: Response, auth: AuthContext) -> Result<Response, String> {
    if response.status() == 401 {
        auth.expire();
        return Err(response_error(response).await);
    }
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(response)
}

pub async fn get_json<R: DeserializeOwned>(auth: AuthContext, path: &str) -> Result<R, String> {
    let response = authorized(Request::get(&api_url(path)), auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response, auth)
        .await?
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_text(auth: AuthContext, path: &str) -> Result<String, String> {
    let response = authorized(Request::get(&api_url(path)), auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response, auth)
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

pub async fn post_json<B: Serialize, R: DeserializeOwned>(
    auth: AuthContext,
    path: &str,
    body: &B,
) -> Result<R, String> {
    let response = authorized(Request::post(&api_url(path)), auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response, auth)
        .await?
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// One page of a collection, filtered and sorted by the backend
pub async fn fetch_page<T: DeserializeOwned>(
    auth: AuthContext,
    collection: &str,
    query: &ListQuery,
) -> Result<Paginated<Stored<T>>, String> {
    let path = with_query(&format!("/api/{}", collection), &query.to_params());
    get_json(auth, &path).await
}

/// Sends a row action with the version the operator saw
pub async fn send_action<T: DeserializeOwned>(
    auth: AuthContext,
    collection: &str,
    id: &str,
    action: &'static str,
    expected_version: i32,
    params: ActionParams,
) -> Result<Stored<T>, String> {
    let request = ActionRequest {
        action,
        expected_version,
        params,
    };
    let path = format!("/api/{}/{}/actions", collection, urlencoding::encode(id));
    post_json(auth, &path, &request).await
}
