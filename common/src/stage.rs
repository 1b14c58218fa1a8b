//! Pure stage derivation for the upload/processing lifecycle.
//!
//! The visible stage is never stored: it is computed from the current
//! session, profile, and daily upload record on every render. Keeping the
//! derivation pure avoids the stale-flag drift that ad-hoc "current stage"
//! variables invite, and makes every state reachable from a plain unit test.

use crate::model::daily_upload::{DailyUploadRecord, ProcessingStatus};
use crate::model::profile::Profile;
use crate::model::session::Session;

/// The state of the daily upload state machine, derived from the record for
/// the current restaurant and calendar date (or its absence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStage {
    /// No record exists for today; the upload stage renders with all four
    /// sources unfilled.
    NoRecordToday,
    /// A pending record exists with no source uploaded yet.
    PartiallyUploaded,
    /// A pending record exists with at least one source uploaded; the
    /// "start processing" action is visible. No source is mandatory, so this
    /// is reachable with anywhere from one to four flags set.
    AwaitingProcessingStart,
    /// Processing has been started and not yet completed.
    Processing,
    /// The simulated run finished; normalization is shown done and report
    /// generation active.
    Completed,
}

impl DayStage {
    pub fn derive(record: Option<&DailyUploadRecord>) -> DayStage {
        let Some(rec) = record else {
            return DayStage::NoRecordToday;
        };
        match rec.processing_status {
            ProcessingStatus::Processing => DayStage::Processing,
            ProcessingStatus::Completed => DayStage::Completed,
            ProcessingStatus::Pending => {
                if rec.any_ready() {
                    DayStage::AwaitingProcessingStart
                } else {
                    DayStage::PartiallyUploaded
                }
            }
        }
    }

    /// Whether this stage renders the upload screen (as opposed to the
    /// processing screen).
    pub fn shows_upload_screen(self) -> bool {
        matches!(
            self,
            DayStage::NoRecordToday | DayStage::PartiallyUploaded | DayStage::AwaitingProcessingStart
        )
    }
}

/// The four top-level screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStage {
    Auth,
    Onboarding,
    Upload,
    Processing,
}

impl AppStage {
    /// Resolves the screen from what is currently known. A missing profile
    /// routes to onboarding regardless of any upload state; the record only
    /// matters once both a session and a profile exist.
    pub fn derive(
        session: Option<&Session>,
        profile: Option<&Profile>,
        record: Option<&DailyUploadRecord>,
    ) -> AppStage {
        if session.is_none() {
            return AppStage::Auth;
        }
        if profile.is_none() {
            return AppStage::Onboarding;
        }
        if DayStage::derive(record).shows_upload_screen() {
            AppStage::Upload
        } else {
            AppStage::Processing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::daily_upload::UploadSource;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "token".into(),
            user_id: Uuid::new_v4(),
            email: "owner@example.com".into(),
        }
    }

    fn profile(user_id: Uuid) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id,
            restaurant_name: "Casa Alba".into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn record(user_id: Uuid) -> DailyUploadRecord {
        DailyUploadRecord {
            id: Uuid::new_v4(),
            user_id,
            restaurant_name: "Casa Alba".into(),
            upload_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            ubereats_ready: false,
            doordash_ready: false,
            grubhub_ready: false,
            offline_ready: false,
            processing_status: ProcessingStatus::Pending,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn no_record_derives_no_record_today() {
        assert_eq!(DayStage::derive(None), DayStage::NoRecordToday);
    }

    #[test]
    fn pending_with_no_flags_is_partially_uploaded() {
        let rec = record(Uuid::new_v4());
        assert_eq!(DayStage::derive(Some(&rec)), DayStage::PartiallyUploaded);
    }

    #[test]
    fn any_single_flag_awaits_processing_start() {
        for source in UploadSource::ALL {
            let mut rec = record(Uuid::new_v4());
            rec.set_ready(source);
            assert_eq!(
                DayStage::derive(Some(&rec)),
                DayStage::AwaitingProcessingStart
            );
        }
    }

    #[test]
    fn all_flags_still_await_processing_start() {
        let mut rec = record(Uuid::new_v4());
        for source in UploadSource::ALL {
            rec.set_ready(source);
        }
        assert_eq!(
            DayStage::derive(Some(&rec)),
            DayStage::AwaitingProcessingStart
        );
    }

    #[test]
    fn status_outranks_flags() {
        let mut rec = record(Uuid::new_v4());
        rec.processing_status = ProcessingStatus::Processing;
        assert_eq!(DayStage::derive(Some(&rec)), DayStage::Processing);
        rec.processing_status = ProcessingStatus::Completed;
        assert_eq!(DayStage::derive(Some(&rec)), DayStage::Completed);
    }

    #[test]
    fn no_session_resolves_auth() {
        assert_eq!(AppStage::derive(None, None, None), AppStage::Auth);
    }

    #[test]
    fn missing_profile_resolves_onboarding() {
        let s = session();
        assert_eq!(AppStage::derive(Some(&s), None, None), AppStage::Onboarding);
    }

    #[test]
    fn fresh_profile_resolves_upload_with_no_flags() {
        let s = session();
        let p = profile(s.user_id);
        assert_eq!(
            AppStage::derive(Some(&s), Some(&p), None),
            AppStage::Upload
        );
    }

    // The DoorDash-only walkthrough: upload one source, start processing,
    // let the simulated run complete.
    #[test]
    fn doordash_only_scenario() {
        let s = session();
        let p = profile(s.user_id);
        let mut rec = record(s.user_id);

        rec.set_ready(UploadSource::DoorDash);
        assert!(!rec.ubereats_ready && !rec.grubhub_ready && !rec.offline_ready);
        assert_eq!(
            DayStage::derive(Some(&rec)),
            DayStage::AwaitingProcessingStart
        );
        assert_eq!(
            AppStage::derive(Some(&s), Some(&p), Some(&rec)),
            AppStage::Upload
        );
        assert!(rec.can_start_processing());

        rec.processing_status = ProcessingStatus::Processing;
        assert_eq!(
            AppStage::derive(Some(&s), Some(&p), Some(&rec)),
            AppStage::Processing
        );
        assert!(!rec.can_start_processing());

        rec.processing_status = ProcessingStatus::Completed;
        assert_eq!(DayStage::derive(Some(&rec)), DayStage::Completed);
        assert_eq!(
            AppStage::derive(Some(&s), Some(&p), Some(&rec)),
            AppStage::Processing
        );
    }
}
