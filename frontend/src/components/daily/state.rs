//! Component state for the daily upload state machine.
//!
//! The state deliberately holds no "current stage" field: the rendered
//! stage is always `DayStage::derive(record)` computed in the view, so the
//! UI cannot drift from the record it claims to display.

use chrono::NaiveDate;
use common::model::daily_upload::{DailyUploadRecord, UploadSource};
use yew::prelude::*;

/// Main state container for the `DailyComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct DailyComponent {
    /// Today's record, `None` until the first upload of the day (or while
    /// the initial read is in flight).
    pub record: Option<DailyUploadRecord>,

    /// The local calendar date this component is bound to, fixed at mount.
    pub today: NaiveDate,

    /// Whether the initial record read has resolved. Gates the view so the
    /// empty upload stage never flashes before the read completes.
    pub day_loaded: bool,

    /// One collaborator action in flight at a time; triggers are disabled
    /// while set.
    pub busy: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// One hidden file input per upload source, indexed by
    /// `UploadSource::index()`.
    pub file_inputs: [NodeRef; 4],
}

impl DailyComponent {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            record: None,
            today,
            day_loaded: false,
            busy: false,
            loaded: false,
            file_inputs: [
                NodeRef::default(),
                NodeRef::default(),
                NodeRef::default(),
                NodeRef::default(),
            ],
        }
    }

    pub fn file_input(&self, source: UploadSource) -> NodeRef {
        self.file_inputs[source.index()].clone()
    }
}
