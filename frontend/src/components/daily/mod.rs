//! Daily upload state machine: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DailyProps`, `DailyComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, read today's record for the restaurant exactly once;
//!   everything rendered afterwards is derived from that record (or its
//!   absence) and the user's explicit actions.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DailyProps;
pub use state::DailyComponent;

impl Component for DailyComponent {
    type Message = Msg;
    type Properties = DailyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DailyComponent::new(helpers::today())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let session = ctx.props().session.clone();
            let restaurant = ctx.props().restaurant_name.clone();
            let date = self.today;
            let link = ctx.link().clone();
            spawn_local(async move {
                match services::records::find_today(&session, &restaurant, date).await {
                    Ok(record) => link.send_message(Msg::RecordLoaded(record)),
                    Err(err) => link.send_message_batch(vec![
                        Msg::OpFailed(err.to_string()),
                        Msg::RecordLoaded(None),
                    ]),
                }
            });
        }
    }
}
