//! Write payload shapes for the database collaborator.
//!
//! Each struct serializes only the columns its write is allowed to touch,
//! so an upsert that marks one source ready cannot clobber the other three
//! flags or the processing status of an existing row.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::model::daily_upload::{ProcessingStatus, UploadSource};

/// Create-or-replace payload for the profile row (conflict target: `user_id`).
#[derive(Debug, Clone, Serialize)]
pub struct NewProfile {
    pub user_id: Uuid,
    pub restaurant_name: String,
}

/// Upsert payload marking exactly one source ready for a day.
///
/// The conflict target is `(restaurant_name, upload_date)`; absent columns
/// are left untouched by the collaborator's merge, which is what keeps the
/// four per-source uploads independent and the operation idempotent.
#[derive(Debug, Clone, Serialize)]
pub struct DailyUploadUpsert {
    pub user_id: Uuid,
    pub restaurant_name: String,
    pub upload_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubereats_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doordash_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grubhub_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_ready: Option<bool>,
}

impl DailyUploadUpsert {
    pub fn for_source(
        user_id: Uuid,
        restaurant_name: &str,
        upload_date: NaiveDate,
        source: UploadSource,
    ) -> Self {
        let mut upsert = Self {
            user_id,
            restaurant_name: restaurant_name.to_string(),
            upload_date,
            ubereats_ready: None,
            doordash_ready: None,
            grubhub_ready: None,
            offline_ready: None,
        };
        match source {
            UploadSource::UberEats => upsert.ubereats_ready = Some(true),
            UploadSource::DoorDash => upsert.doordash_ready = Some(true),
            UploadSource::Grubhub => upsert.grubhub_ready = Some(true),
            UploadSource::Offline => upsert.offline_ready = Some(true),
        }
        upsert
    }
}

/// Status patch applied to an existing record by id.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    pub processing_status: ProcessingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_serializes_only_the_touched_flag() {
        let upsert = DailyUploadUpsert::for_source(
            Uuid::new_v4(),
            "Casa Alba",
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            UploadSource::Grubhub,
        );
        let json = serde_json::to_value(&upsert).unwrap();
        assert_eq!(json["grubhub_ready"], true);
        assert_eq!(json["upload_date"], "2026-08-30");
        for absent in ["ubereats_ready", "doordash_ready", "offline_ready"] {
            assert!(json.get(absent).is_none(), "{absent} should be omitted");
        }
    }

    #[test]
    fn every_source_targets_its_own_column() {
        for source in UploadSource::ALL {
            let upsert = DailyUploadUpsert::for_source(
                Uuid::new_v4(),
                "Casa Alba",
                NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
                source,
            );
            let json = serde_json::to_value(&upsert).unwrap();
            assert_eq!(json[source.column()], true);
        }
    }

    #[test]
    fn status_patch_uses_lowercase_status() {
        let patch = StatusPatch {
            processing_status: ProcessingStatus::Processing,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["processing_status"], "processing");
    }
}
