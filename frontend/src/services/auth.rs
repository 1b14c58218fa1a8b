//! Auth collaborator: session restore, sign-in, sign-up, sign-out.
//!
//! The issued session is persisted to browser local storage so a reload can
//! restore it without a network round-trip. `current_session` is consulted
//! exactly once at startup; there is no refresh or retry loop.

use common::error::AppError;
use common::model::session::Session;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;
use uuid::Uuid;

use crate::config;

const SESSION_KEY: &str = "salesdesk.session";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

/// Returns the persisted session, if any. A missing or unreadable entry is
/// simply no session.
pub fn current_session() -> Option<Session> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, AppError> {
    let url = format!(
        "{}/auth/v1/token?grant_type=password",
        config::base_url()
    );
    token_request(&url, email, password).await
}

pub async fn sign_up(email: &str, password: &str) -> Result<Session, AppError> {
    let url = format!("{}/auth/v1/signup", config::base_url());
    token_request(&url, email, password).await
}

/// Revokes the session and clears local storage. The local state is cleared
/// even when the revoke call fails, so sign-out always succeeds from the
/// user's point of view.
pub async fn sign_out(session: &Session) {
    let url = format!("{}/auth/v1/logout", config::base_url());
    let result = Request::post(&url)
        .header("apikey", config::publishable_key())
        .header(
            "Authorization",
            &format!("Bearer {}", session.access_token),
        )
        .send()
        .await;
    if let Err(err) = result {
        gloo_console::warn!("session revoke failed:", err.to_string());
    }
    LocalStorage::delete(SESSION_KEY);
}

async fn token_request(url: &str, email: &str, password: &str) -> Result<Session, AppError> {
    let response = Request::post(url)
        .header("apikey", config::publishable_key())
        .json(&serde_json::json!({ "email": email, "password": password }))
        .map_err(|err| AppError::Auth(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Auth(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Auth(super::error_message(response).await));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|err| AppError::Auth(err.to_string()))?;
    let session = Session {
        access_token: token.access_token,
        user_id: token.user.id,
        email: token.user.email.unwrap_or_default(),
    };
    if let Err(err) = LocalStorage::set(SESSION_KEY, &session) {
        gloo_console::warn!("could not persist session:", err.to_string());
    }
    Ok(session)
}
