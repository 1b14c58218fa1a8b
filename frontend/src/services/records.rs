//! Row store collaborator: profile and daily-upload rows.
//!
//! Upserts rely on the store's conflict-target semantics: the profile row
//! conflicts on `user_id`, the daily record on
//! `(restaurant_name, upload_date)`. `Prefer: resolution=merge-duplicates`
//! makes a repeat write merge into the existing row instead of erroring, and
//! `return=representation` hands the merged row back so local state can be
//! reconciled with what the store actually holds.

use chrono::NaiveDate;
use common::error::AppError;
use common::model::daily_upload::{DailyUploadRecord, ProcessingStatus};
use common::model::profile::Profile;
use common::model::session::Session;
use common::requests::{DailyUploadUpsert, NewProfile, StatusPatch};
use gloo_net::http::{Request, RequestBuilder};
use uuid::Uuid;

use crate::config;

const UPSERT_PREFER: &str = "resolution=merge-duplicates,return=representation";

fn table_url(table: &str) -> String {
    format!("{}/rest/v1/{}", config::base_url(), table)
}

fn authed(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    builder
        .header("apikey", config::publishable_key())
        .header(
            "Authorization",
            &format!("Bearer {}", session.access_token),
        )
}

pub async fn find_profile(session: &Session) -> Result<Option<Profile>, AppError> {
    let user_filter = format!("eq.{}", session.user_id);
    let response = authed(Request::get(&table_url("profiles")), session)
        .query([
            ("select", "*"),
            ("user_id", user_filter.as_str()),
            ("limit", "1"),
        ])
        .send()
        .await
        .map_err(|err| AppError::Profile(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Profile(super::error_message(response).await));
    }
    let rows: Vec<Profile> = response
        .json()
        .await
        .map_err(|err| AppError::Profile(err.to_string()))?;
    Ok(rows.into_iter().next())
}

pub async fn upsert_profile(
    session: &Session,
    restaurant_name: &str,
) -> Result<Profile, AppError> {
    let payload = NewProfile {
        user_id: session.user_id,
        restaurant_name: restaurant_name.to_string(),
    };
    let response = authed(Request::post(&table_url("profiles")), session)
        .query([("on_conflict", "user_id")])
        .header("Prefer", UPSERT_PREFER)
        .json(&payload)
        .map_err(|err| AppError::Profile(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Profile(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Profile(super::error_message(response).await));
    }
    let rows: Vec<Profile> = response
        .json()
        .await
        .map_err(|err| AppError::Profile(err.to_string()))?;
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::Profile("profile upsert returned no row".to_string()))
}

/// Reads the daily record for (restaurant, date), `None` when no source has
/// been uploaded yet that day.
pub async fn find_today(
    session: &Session,
    restaurant_name: &str,
    date: NaiveDate,
) -> Result<Option<DailyUploadRecord>, AppError> {
    let name_filter = format!("eq.{restaurant_name}");
    let date_filter = format!("eq.{date}");
    let response = authed(Request::get(&table_url("daily_uploads")), session)
        .query([
            ("select", "*"),
            ("restaurant_name", name_filter.as_str()),
            ("upload_date", date_filter.as_str()),
            ("limit", "1"),
        ])
        .send()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Upload(super::error_message(response).await));
    }
    let rows: Vec<DailyUploadRecord> = response
        .json()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;
    Ok(rows.into_iter().next())
}

pub async fn upsert_daily(
    session: &Session,
    upsert: &DailyUploadUpsert,
) -> Result<DailyUploadRecord, AppError> {
    let response = authed(Request::post(&table_url("daily_uploads")), session)
        .query([("on_conflict", "restaurant_name,upload_date")])
        .header("Prefer", UPSERT_PREFER)
        .json(upsert)
        .map_err(|err| AppError::Upload(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Upload(super::error_message(response).await));
    }
    let rows: Vec<DailyUploadRecord> = response
        .json()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::Upload("daily upsert returned no row".to_string()))
}

/// Patches the processing status of an existing record by id.
pub async fn set_status(
    session: &Session,
    record_id: Uuid,
    status: ProcessingStatus,
) -> Result<(), AppError> {
    let id_filter = format!("eq.{record_id}");
    let response = authed(Request::patch(&table_url("daily_uploads")), session)
        .query([("id", id_filter.as_str())])
        .json(&StatusPatch {
            processing_status: status,
        })
        .map_err(|err| AppError::Upload(err.to_string()))?
        .send()
        .await
        .map_err(|err| AppError::Upload(err.to_string()))?;

    if !response.ok() {
        return Err(AppError::Upload(super::error_message(response).await));
    }
    Ok(())
}
