use common::model::daily_upload::{DailyUploadRecord, UploadSource};
use uuid::Uuid;

#[derive(Clone)]
pub enum Msg {
    RecordLoaded(Option<DailyUploadRecord>),
    PickFile(UploadSource),
    FileChosen(UploadSource, web_sys::File),
    UploadDone(UploadSource, DailyUploadRecord),
    StartProcessing,
    ProcessingStarted(Uuid),
    SimulationElapsed(Uuid),
    CompletionSaved(Uuid),
    OpFailed(String),
}
