//! Root component: session resolution and the profile/onboarding gate.
//!
//! On first render the persisted session is consulted exactly once; while
//! that (and the follow-up profile read) is in flight, a neutral loading
//! indicator is shown so the sign-in form never flashes for an already
//! authenticated owner. The visible screen is derived from
//! (session, profile) through [`AppStage`], never stored.

use common::model::profile::Profile;
use common::model::session::Session;
use common::stage::AppStage;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::auth::AuthComponent;
use crate::components::daily::DailyComponent;
use crate::components::onboarding::OnboardingComponent;
use crate::services;

pub enum Msg {
    SessionResolved(Option<Session>),
    ProfileResolved(Option<Profile>),
    SignedIn(Session),
    ProfileCreated(Profile),
    SignOut,
}

pub struct App {
    booting: bool,
    checking_profile: bool,
    session: Option<Session>,
    profile: Option<Profile>,
    resolved: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            booting: true,
            checking_profile: false,
            session: None,
            profile: None,
            resolved: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionResolved(None) => {
                self.booting = false;
                true
            }
            Msg::SessionResolved(Some(session)) | Msg::SignedIn(session) => {
                self.booting = false;
                self.checking_profile = true;
                self.session = Some(session.clone());
                fetch_profile(ctx.link().clone(), session);
                true
            }
            Msg::ProfileResolved(profile) => {
                self.checking_profile = false;
                self.profile = profile;
                true
            }
            Msg::ProfileCreated(profile) => {
                self.profile = Some(profile);
                true
            }
            Msg::SignOut => {
                // Clearing local state tears down the daily component, which
                // also renders any pending simulated-completion timer inert.
                if let Some(session) = self.session.take() {
                    spawn_local(async move {
                        services::auth::sign_out(&session).await;
                    });
                }
                self.profile = None;
                self.checking_profile = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.booting || self.checking_profile {
            return html! {
                <div class="app-loading">{"Loading…"}</div>
            };
        }

        let stage = AppStage::derive(self.session.as_ref(), self.profile.as_ref(), None);
        let body = match (stage, self.session.clone(), self.profile.clone()) {
            (AppStage::Auth, _, _) => html! {
                <AuthComponent on_signed_in={link.callback(Msg::SignedIn)} />
            },
            (AppStage::Onboarding, Some(session), _) => html! {
                <OnboardingComponent
                    {session}
                    on_profile_created={link.callback(Msg::ProfileCreated)}
                />
            },
            (_, Some(session), Some(profile)) => html! {
                <DailyComponent
                    {session}
                    restaurant_name={profile.restaurant_name.clone()}
                />
            },
            _ => html! {},
        };

        html! {
            <div class="app-root">
                { self.build_header(link) }
                { body }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.resolved {
            self.resolved = true;
            ctx.link()
                .send_message(Msg::SessionResolved(services::auth::current_session()));
        }
    }
}

impl App {
    fn build_header(&self, link: &yew::html::Scope<Self>) -> Html {
        let account = match (&self.session, &self.profile) {
            (Some(session), Some(profile)) => html! {
                <span class="header-account">
                    { format!("{} · {}", profile.restaurant_name, session.email) }
                </span>
            },
            (Some(session), None) => html! {
                <span class="header-account">{ session.email.clone() }</span>
            },
            _ => html! {},
        };
        html! {
            <header class="app-header">
                <h1>{"Daily Sales Desk"}</h1>
                { account }
                {
                    if self.session.is_some() {
                        html! {
                            <button class="link-btn" onclick={link.callback(|_| Msg::SignOut)}>
                                {"Sign out"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>
        }
    }
}

fn fetch_profile(link: yew::html::Scope<App>, session: Session) {
    spawn_local(async move {
        match services::records::find_profile(&session).await {
            Ok(profile) => link.send_message(Msg::ProfileResolved(profile)),
            Err(err) => {
                // A failed read routes to onboarding rather than an error
                // screen; the row will be re-created there.
                gloo_console::warn!("profile read failed:", err.to_string());
                link.send_message(Msg::ProfileResolved(None));
            }
        }
    });
}
