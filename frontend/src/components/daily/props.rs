use common::model::session::Session;
use yew::prelude::*;

/// Properties for the `DailyComponent`.
///
/// The session and restaurant name together identify the one
/// `(restaurant_name, upload_date)` record this component may read or
/// write. Swapping either remounts the component, which discards any
/// in-memory state (and scheduled timers) belonging to the previous pair.
#[derive(Properties, PartialEq, Clone)]
pub struct DailyProps {
    pub session: Session,
    pub restaurant_name: String,
}
