use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated session as issued by the auth collaborator.
///
/// The `user_id` is an opaque identity key owned by the collaborator; the
/// client never interprets it beyond using it as a lookup key. The access
/// token is attached as a bearer credential to every collaborator call and
/// the whole session is persisted to browser local storage so it survives a
/// page reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
}
