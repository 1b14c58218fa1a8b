//! Update function for the daily upload state machine.
//!
//! Follows the same Elm-style shape as the rest of the components: receives
//! the current `DailyComponent` state, the `Context`, and a `Msg`, mutates
//! the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Per-source upload: extension filter, blob write to a deterministic
//!   path, then a conflict-keyed upsert of that source's ready flag; any
//!   failure aborts with no local mutation and a toast.
//! - `StartProcessing`, guarded by `can_start_processing` (at least one
//!   ready source, status still pending); rejected with no collaborator
//!   call otherwise.
//! - The simulated completion: a one-shot timer scheduled per successful
//!   start, carrying the target record id. A fired timer whose record is no
//!   longer the active one (logout, different day) is a no-op.

use common::error::AppError;
use common::model::daily_upload::{DailyUploadRecord, ProcessingStatus};
use common::requests::DailyUploadUpsert;
use gloo_file::{futures::read_as_bytes, Blob};
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services;
use crate::toast::show_toast;

use super::helpers;
use super::messages::Msg;
use super::state::DailyComponent;

/// Fixed delay between a successful processing start and the simulated
/// completion write.
const SIMULATED_PROCESSING_MS: u32 = 8_000;

pub fn update(component: &mut DailyComponent, ctx: &Context<DailyComponent>, msg: Msg) -> bool {
    match msg {
        Msg::RecordLoaded(record) => {
            component.day_loaded = true;
            component.record = record;
            true
        }
        Msg::PickFile(source) => {
            if component.busy {
                return false;
            }
            if let Some(input) = component.file_input(source).cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(source, file) => {
            if component.busy {
                return false;
            }
            let Some(extension) = helpers::accepted_extension(&file.name()) else {
                show_toast("Only .csv or .xlsx exports are accepted.");
                return false;
            };
            if file.size() == 0.0 {
                show_toast("That file is empty.");
                return false;
            }
            component.busy = true;

            let session = ctx.props().session.clone();
            let restaurant = ctx.props().restaurant_name.clone();
            let date = component.today;
            let path = helpers::object_path(&restaurant, date, source, extension);
            let link = ctx.link().clone();
            spawn_local(async move {
                let bytes = match read_as_bytes(&Blob::from(file)).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        link.send_message(Msg::OpFailed(err.to_string()));
                        return;
                    }
                };
                let upsert =
                    DailyUploadUpsert::for_source(session.user_id, &restaurant, date, source);
                let result: Result<DailyUploadRecord, AppError> = async {
                    services::storage::put_object(&session, &path, bytes).await?;
                    services::records::upsert_daily(&session, &upsert).await
                }
                .await;
                match result {
                    Ok(row) => link.send_message(Msg::UploadDone(source, row)),
                    Err(err) => link.send_message(Msg::OpFailed(err.to_string())),
                }
            });
            true
        }
        Msg::UploadDone(source, row) => {
            component.busy = false;
            match component.record.as_mut() {
                Some(record) => record.merge_remote(row),
                None => component.record = Some(row),
            }
            show_toast(&format!("{} export uploaded.", source.label()));
            true
        }
        Msg::StartProcessing => {
            let Some(record) = component.record.as_ref() else {
                return false;
            };
            if component.busy || !record.can_start_processing() {
                return false;
            }
            component.busy = true;

            let session = ctx.props().session.clone();
            let record_id = record.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match services::records::set_status(
                    &session,
                    record_id,
                    ProcessingStatus::Processing,
                )
                .await
                {
                    Ok(()) => link.send_message(Msg::ProcessingStarted(record_id)),
                    Err(err) => link.send_message(Msg::OpFailed(err.to_string())),
                }
            });
            true
        }
        Msg::ProcessingStarted(record_id) => {
            component.busy = false;
            let Some(record) = component.record.as_mut() else {
                return false;
            };
            if record.id != record_id {
                return false;
            }
            record.processing_status = ProcessingStatus::Processing;

            // Exactly one shot per start. The fired message carries the
            // record id so a timer that outlives this record cannot touch
            // whatever record is active by then.
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(SIMULATED_PROCESSING_MS).await;
                link.send_message(Msg::SimulationElapsed(record_id));
            });
            true
        }
        Msg::SimulationElapsed(record_id) => {
            let still_current = component
                .record
                .as_ref()
                .is_some_and(|record| record.accepts_completion(record_id));
            if !still_current {
                return false;
            }
            let session = ctx.props().session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match services::records::set_status(
                    &session,
                    record_id,
                    ProcessingStatus::Completed,
                )
                .await
                {
                    Ok(()) => link.send_message(Msg::CompletionSaved(record_id)),
                    Err(err) => link.send_message(Msg::OpFailed(err.to_string())),
                }
            });
            false
        }
        Msg::CompletionSaved(record_id) => {
            let Some(record) = component.record.as_mut() else {
                return false;
            };
            if record.id != record_id {
                return false;
            }
            record.processing_status = ProcessingStatus::Completed;
            true
        }
        Msg::OpFailed(message) => {
            component.busy = false;
            gloo_console::error!("daily upload action failed:", message.clone());
            show_toast(&message);
            true
        }
    }
}
