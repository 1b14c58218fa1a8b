//! Thin async clients for the three external collaborators: auth, object
//! storage, and the row store. Each module wraps `gloo_net` requests, maps
//! non-2xx responses to the matching [`common::error::AppError`] variant,
//! and never retries.

pub mod auth;
pub mod records;
pub mod storage;

use gloo_net::http::Response;

/// Extracts a human-readable message from a failed collaborator response.
///
/// The backend-as-a-service reports errors as JSON with one of a few
/// well-known keys; fall back to the raw body, then to the status code.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        for key in ["message", "error_description", "msg", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        body
    }
}
