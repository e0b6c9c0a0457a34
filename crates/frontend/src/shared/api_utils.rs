//! API utilities for frontend-backend communication

use gloo_net::http::Response;
use serde::Deserialize;

/// Base URL of the backend: the page's host on port 3000.
///
/// Empty when there is no window (native tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path with an encoded query string; empty params add nothing
pub fn with_query<Q: serde::Serialize>(path: &str, params: &Q) -> String {
    match serde_qs::to_string(params) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Backend error text from a `{"error": "..."}` body, or the status code
pub fn error_text(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("Request failed: {}", status))
}

pub async fn response_error(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_text(status, &body)
}
