use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse lifecycle marker for a day's aggregate report generation.
///
/// The client only ever moves this forward (`pending → processing →
/// completed`); there is no backward transition anywhere in the codebase,
/// and [`DailyUploadRecord::merge_remote`] enforces the same direction when
/// folding in rows returned by the database collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
}

impl ProcessingStatus {
    /// Position along the one-way lifecycle, used for monotonic merges.
    pub fn rank(self) -> u8 {
        match self {
            ProcessingStatus::Pending => 0,
            ProcessingStatus::Processing => 1,
            ProcessingStatus::Completed => 2,
        }
    }
}

/// One of the four fixed origins of a daily sales export.
///
/// Each variant maps to exactly one boolean column on
/// [`DailyUploadRecord`], one storage object name, and one display
/// label/color. The set is a static lookup table, not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadSource {
    UberEats,
    DoorDash,
    Grubhub,
    Offline,
}

impl UploadSource {
    pub const ALL: [UploadSource; 4] = [
        UploadSource::UberEats,
        UploadSource::DoorDash,
        UploadSource::Grubhub,
        UploadSource::Offline,
    ];

    /// Stable position in [`Self::ALL`], handy for per-source UI slots.
    pub fn index(self) -> usize {
        match self {
            UploadSource::UberEats => 0,
            UploadSource::DoorDash => 1,
            UploadSource::Grubhub => 2,
            UploadSource::Offline => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadSource::UberEats => "Uber Eats",
            UploadSource::DoorDash => "DoorDash",
            UploadSource::Grubhub => "Grubhub",
            UploadSource::Offline => "Offline sales",
        }
    }

    /// Badge color used by the upload stage cards.
    pub fn color(self) -> &'static str {
        match self {
            UploadSource::UberEats => "#06c167",
            UploadSource::DoorDash => "#ff3008",
            UploadSource::Grubhub => "#ff8000",
            UploadSource::Offline => "#607d8b",
        }
    }

    /// Name of the boolean column on the `daily_uploads` table.
    pub fn column(self) -> &'static str {
        match self {
            UploadSource::UberEats => "ubereats_ready",
            UploadSource::DoorDash => "doordash_ready",
            UploadSource::Grubhub => "grubhub_ready",
            UploadSource::Offline => "offline_ready",
        }
    }

    /// File stem of the stored export object for this source.
    pub fn object_stem(self) -> &'static str {
        match self {
            UploadSource::UberEats => "ubereats",
            UploadSource::DoorDash => "doordash",
            UploadSource::Grubhub => "grubhub",
            UploadSource::Offline => "offline",
        }
    }
}

/// The per-(restaurant, calendar date) aggregate of ready flags and
/// processing status.
///
/// The natural key is `(restaurant_name, upload_date)`; uniqueness is
/// enforced by the database collaborator through its upsert conflict target,
/// which is what makes re-uploading a source idempotent. Rows are created
/// implicitly by the first upload of any source for a day and are never
/// deleted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUploadRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_name: String,
    pub upload_date: NaiveDate,
    pub ubereats_ready: bool,
    pub doordash_ready: bool,
    pub grubhub_ready: bool,
    pub offline_ready: bool,
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DailyUploadRecord {
    pub fn ready(&self, source: UploadSource) -> bool {
        match source {
            UploadSource::UberEats => self.ubereats_ready,
            UploadSource::DoorDash => self.doordash_ready,
            UploadSource::Grubhub => self.grubhub_ready,
            UploadSource::Offline => self.offline_ready,
        }
    }

    pub fn set_ready(&mut self, source: UploadSource) {
        match source {
            UploadSource::UberEats => self.ubereats_ready = true,
            UploadSource::DoorDash => self.doordash_ready = true,
            UploadSource::Grubhub => self.grubhub_ready = true,
            UploadSource::Offline => self.offline_ready = true,
        }
    }

    pub fn any_ready(&self) -> bool {
        UploadSource::ALL.iter().any(|source| self.ready(*source))
    }

    pub fn all_ready(&self) -> bool {
        UploadSource::ALL.iter().all(|source| self.ready(*source))
    }

    /// Whether the "start processing" action is permitted: at least one
    /// source uploaded and the status still pending. No source is mandatory.
    pub fn can_start_processing(&self) -> bool {
        self.processing_status == ProcessingStatus::Pending && self.any_ready()
    }

    /// Whether a fired simulated-completion timer may complete this record.
    ///
    /// A timer outlives the state it was scheduled under (logout, a new
    /// sign-in, a different day's record), so it carries the id of the
    /// record it targets; it may only apply if that record is still the
    /// active one and still processing.
    pub fn accepts_completion(&self, record_id: Uuid) -> bool {
        self.id == record_id && self.processing_status == ProcessingStatus::Processing
    }

    /// Folds a row returned by the database collaborator into local state.
    ///
    /// Ready flags are monotonic within a day (there is no "undo upload"),
    /// and the processing status only moves forward, so a remote row may
    /// never clear a flag the client already saw as true nor move the status
    /// backward. Everything else (timestamps, id on first insert) is taken
    /// from the remote row.
    pub fn merge_remote(&mut self, remote: DailyUploadRecord) {
        let status = if remote.processing_status.rank() >= self.processing_status.rank() {
            remote.processing_status
        } else {
            self.processing_status
        };
        let previous = self.clone();
        *self = remote;
        for source in UploadSource::ALL {
            if previous.ready(source) {
                self.set_ready(source);
            }
        }
        self.processing_status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DailyUploadRecord {
        DailyUploadRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
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
    fn set_ready_is_idempotent_per_source() {
        let mut rec = record();
        rec.set_ready(UploadSource::DoorDash);
        rec.set_ready(UploadSource::DoorDash);
        assert!(rec.doordash_ready);
        assert!(!rec.ubereats_ready);
        assert!(!rec.grubhub_ready);
        assert!(!rec.offline_ready);
    }

    #[test]
    fn can_start_requires_a_ready_source() {
        let mut rec = record();
        assert!(!rec.can_start_processing());
        rec.set_ready(UploadSource::Grubhub);
        assert!(rec.can_start_processing());
    }

    #[test]
    fn can_start_requires_pending_status() {
        let mut rec = record();
        rec.set_ready(UploadSource::UberEats);
        rec.processing_status = ProcessingStatus::Processing;
        assert!(!rec.can_start_processing());
        rec.processing_status = ProcessingStatus::Completed;
        assert!(!rec.can_start_processing());
    }

    #[test]
    fn all_ready_requires_every_source() {
        let mut rec = record();
        for source in UploadSource::ALL {
            assert!(!rec.all_ready());
            rec.set_ready(source);
        }
        assert!(rec.all_ready());
        assert!(rec.any_ready());
    }

    #[test]
    fn completion_applies_only_to_the_processing_record() {
        let mut rec = record();
        rec.set_ready(UploadSource::DoorDash);
        rec.processing_status = ProcessingStatus::Processing;
        assert!(rec.accepts_completion(rec.id));
    }

    #[test]
    fn completion_ignores_a_timer_for_another_record() {
        // A timer scheduled before logout must not touch the record a
        // different owner creates the same day.
        let mut rec = record();
        rec.set_ready(UploadSource::DoorDash);
        rec.processing_status = ProcessingStatus::Processing;
        let stale_id = Uuid::new_v4();
        assert!(!rec.accepts_completion(stale_id));
    }

    #[test]
    fn completion_requires_processing_status() {
        let mut rec = record();
        rec.set_ready(UploadSource::DoorDash);
        assert!(!rec.accepts_completion(rec.id));
        rec.processing_status = ProcessingStatus::Completed;
        assert!(!rec.accepts_completion(rec.id));
    }

    #[test]
    fn merge_never_clears_a_ready_flag() {
        let mut local = record();
        local.set_ready(UploadSource::UberEats);

        let mut remote = record();
        remote.id = local.id;
        remote.set_ready(UploadSource::Offline);

        local.merge_remote(remote);
        assert!(local.ubereats_ready);
        assert!(local.offline_ready);
    }

    #[test]
    fn merge_never_moves_status_backward() {
        let mut local = record();
        local.set_ready(UploadSource::DoorDash);
        local.processing_status = ProcessingStatus::Completed;

        let mut remote = record();
        remote.id = local.id;
        remote.processing_status = ProcessingStatus::Pending;

        local.merge_remote(remote);
        assert_eq!(local.processing_status, ProcessingStatus::Completed);
    }

    #[test]
    fn merge_takes_forward_status_from_remote() {
        let mut local = record();
        let mut remote = local.clone();
        remote.processing_status = ProcessingStatus::Processing;

        local.merge_remote(remote);
        assert_eq!(local.processing_status, ProcessingStatus::Processing);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProcessingStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let back: ProcessingStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, ProcessingStatus::Completed);
    }

    #[test]
    fn source_table_is_consistent() {
        for (i, source) in UploadSource::ALL.iter().enumerate() {
            assert_eq!(source.index(), i);
            assert!(source.column().ends_with("_ready"));
        }
    }
}
