//! Sign-in / sign-up form. One component, mode toggle, busy flag while a
//! collaborator call is outstanding. Failures surface the collaborator's
//! message verbatim and leave the form re-actionable.

use common::model::session::Session;
use web_sys::{HtmlInputElement, InputEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services;

#[derive(Clone, Copy, PartialEq)]
pub enum Mode {
    SignIn,
    SignUp,
}

#[derive(Clone)]
pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    SetMode(Mode),
    Submit,
    Succeeded(Session),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct AuthProps {
    pub on_signed_in: Callback<Session>,
}

pub struct AuthComponent {
    email: String,
    password: String,
    mode: Mode,
    busy: bool,
    error: Option<String>,
}

impl Component for AuthComponent {
    type Message = Msg;
    type Properties = AuthProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            mode: Mode::SignIn,
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::SetMode(mode) => {
                self.mode = mode;
                self.error = None;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;

                let mode = self.mode;
                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match mode {
                        Mode::SignIn => services::auth::sign_in(&email, &password).await,
                        Mode::SignUp => services::auth::sign_up(&email, &password).await,
                    };
                    match result {
                        Ok(session) => link.send_message(Msg::Succeeded(session)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::Succeeded(session) => {
                self.busy = false;
                ctx.props().on_signed_in.emit(session);
                true
            }
            Msg::Failed(message) => {
                self.busy = false;
                gloo_console::error!("auth failed:", message.clone());
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let (title, submit_label, switch_label, other_mode) = match self.mode {
            Mode::SignIn => ("Sign in", "Sign in", "Need an account? Sign up", Mode::SignUp),
            Mode::SignUp => ("Create account", "Sign up", "Have an account? Sign in", Mode::SignIn),
        };

        html! {
            <div class="auth-card">
                <h2>{title}</h2>
                <input
                    type="email"
                    placeholder="Email"
                    value={self.email.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={self.password.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
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
                    { if self.busy { "Working…" } else { submit_label } }
                </button>
                <button
                    class="link-btn"
                    disabled={self.busy}
                    onclick={link.callback(move |_| Msg::SetMode(other_mode))}
                >
                    {switch_label}
                </button>
            </div>
        }
    }
}
