//! Onboarding: capture the restaurant name and create the profile row.
//!
//! Validation is local (trimmed name must be non-empty); only a valid name
//! goes to the collaborator. The created profile is reported up to the root
//! component, which then proceeds to today's upload check.

use common::error::AppError;
use common::model::profile::Profile;
use common::model::session::Session;
use web_sys::{HtmlInputElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services;

#[derive(Clone)]
pub enum Msg {
    SetName(String),
    Submit,
    Created(Profile),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct OnboardingProps {
    pub session: Session,
    pub on_profile_created: Callback<Profile>,
}

pub struct OnboardingComponent {
    name: String,
    busy: bool,
    error: Option<String>,
}

impl Component for OnboardingComponent {
    type Message = Msg;
    type Properties = OnboardingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.name = name;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                let name = self.name.trim().to_string();
                if name.is_empty() {
                    let err = AppError::Validation(
                        "Please enter your restaurant's name.".to_string(),
                    );
                    self.error = Some(err.to_string());
                    return true;
                }
                self.busy = true;
                self.error = None;

                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match services::records::upsert_profile(&session, &name).await {
                        Ok(profile) => link.send_message(Msg::Created(profile)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::Created(profile) => {
                self.busy = false;
                ctx.props().on_profile_created.emit(profile);
                true
            }
            Msg::Failed(message) => {
                self.busy = false;
                gloo_console::error!("profile save failed:", message.clone());
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="onboarding-card">
                <h2>{"Welcome! What's your restaurant called?"}</h2>
                <input
                    type="text"
                    placeholder="Restaurant name"
                    value={self.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                {
                    if let Some(error) = &self.error {
                        html! { <p class="form-error">{error.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="primary-btn"
                    disabled={self.busy}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if self.busy { "Saving…" } else { "Continue" } }
                </button>
            </div>
        }
    }
}
