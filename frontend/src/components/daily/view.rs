//! View rendering for the daily upload state machine.
//!
//! The rendered stage is computed from the record on every pass via
//! `DayStage::derive`; the component never stores which screen it is on.
//! The upload stage shows one card per source with a hidden file input; the
//! processing stage shows the two report steps.

use common::model::daily_upload::UploadSource;
use common::stage::DayStage;
use web_sys::{Event, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DailyComponent;

pub fn view(component: &DailyComponent, ctx: &Context<DailyComponent>) -> Html {
    if !component.day_loaded {
        return html! {
            <div class="app-loading">{"Checking today's uploads…"}</div>
        };
    }
    let link = ctx.link();
    match DayStage::derive(component.record.as_ref()) {
        DayStage::NoRecordToday | DayStage::PartiallyUploaded => {
            build_upload_stage(component, link, false)
        }
        DayStage::AwaitingProcessingStart => build_upload_stage(component, link, true),
        DayStage::Processing => build_processing_stage(false),
        DayStage::Completed => build_processing_stage(true),
    }
}

fn build_upload_stage(
    component: &DailyComponent,
    link: &Scope<DailyComponent>,
    show_start: bool,
) -> Html {
    html! {
        <div class="upload-stage">
            <h2>{ format!("Today's sales exports · {}", component.today) }</h2>
            <p class="stage-hint">
                {"Upload the export from each platform you used today. No platform is mandatory."}
            </p>
            <div class="source-grid">
                { for UploadSource::ALL.iter().map(|source| source_card(component, link, *source)) }
            </div>
            {
                if show_start {
                    html! {
                        <button
                            class="primary-btn"
                            disabled={component.busy}
                            onclick={link.callback(|_| Msg::StartProcessing)}
                        >
                            {"Start processing"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn source_card(
    component: &DailyComponent,
    link: &Scope<DailyComponent>,
    source: UploadSource,
) -> Html {
    let ready = component
        .record
        .as_ref()
        .map_or(false, |record| record.ready(source));

    // Clearing the input value lets the owner re-pick the same file and
    // still get a change event.
    let onchange = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().and_then(|files| files.get(0));
        input.set_value("");
        match picked {
            Some(file) => vec![Msg::FileChosen(source, file)],
            None => vec![],
        }
    });

    html! {
        <div class="source-card" style={format!("border-top: 3px solid {};", source.color())}>
            <span class="source-label">{ source.label() }</span>
            {
                if ready {
                    html! {
                        <span class="source-badge" style={format!("color: {};", source.color())}>
                            {"Uploaded ✓"}
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            <input
                type="file"
                accept=".csv,.xlsx"
                style="display: none;"
                ref={component.file_input(source)}
                onchange={onchange}
            />
            <button
                class="secondary-btn"
                disabled={component.busy}
                onclick={link.callback(move |_| Msg::PickFile(source))}
            >
                { if ready { "Replace file" } else { "Upload file" } }
            </button>
        </div>
    }
}

fn build_processing_stage(completed: bool) -> Html {
    html! {
        <div class="processing-stage">
            <h2>{"Building today's report"}</h2>
            <ul class="step-list">
                { step("Normalizing platform exports", if completed { "done" } else { "active" }) }
                { step("Generating daily report", if completed { "active" } else { "waiting" }) }
            </ul>
        </div>
    }
}

fn step(label: &str, state: &'static str) -> Html {
    let marker = match state {
        "done" => "✓",
        "active" => "●",
        _ => "○",
    };
    html! {
        <li class={classes!("step", state)}>
            <span class="step-marker">{marker}</span>
            { label }
        </li>
    }
}
