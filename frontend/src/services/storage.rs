//! Blob store collaborator.

use common::error::AppError;
use common::model::session::Session;
use gloo_net::http::Request;

use crate::config;

/// Bucket holding every uploaded sales export.
pub const BUCKET: &str = "daily-uploads";

/// Writes an export file to the bucket at a deterministic path.
///
/// `x-upsert: true` makes a re-upload of the same source on the same day
/// overwrite the previously stored object instead of failing, matching the
/// idempotence of the ready-flag upsert.
pub async fn put_object(session: &Session, path: &str, bytes: Vec<u8>) -> Result<(), AppError> {
    let url = format!(
        "{}/storage/v1/object/{}/{}",
        config::base_url(),
        BUCKET,
        path
    );
    let body = js_sys::Uint8Array::from(bytes.as_slice());
    let response = Request::post(&url)
        .header("apikey", config::publishable_key())
        .header(
            "Authorization",
            &format!("Bearer {}", session.access_token),
        )
        .header("x-upsert", "true")
        .header("Content-Type", "application/octet-stream")
        .body(body)
        .map_err(|err| AppError::Upload(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Upload(super::error_message(response).await));
    }
    Ok(())
}
