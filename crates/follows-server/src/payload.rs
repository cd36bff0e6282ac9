//! Wire form of a `PATCH /users/{id}` body.
//!
//! The body is `{"action": "view" | "follow" | "unfollow", "user_id": "..."}`.
//! Anything that cannot be mapped onto an [`Action`] is an unrecognized
//! action, except a follow/unfollow without a string `user_id`, which names
//! no valid related user. `user_id` is ignored for `view`.

use follows_dispatch::{Action, DispatchError, DispatchResult};
use follows_types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub action: Option<String>,
    /// Kept untyped so a mistyped id does not discard the whole body.
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl ActionRequest {
    /// Parse a raw request body. An empty or malformed body yields an
    /// empty request.
    pub fn from_body(body: &[u8]) -> Self {
        if body.is_empty() {
            return Self::default();
        }
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unparseable action body");
            Self::default()
        })
    }

    pub fn into_action(self) -> DispatchResult<Action> {
        match self.action.as_deref() {
            Some("view") => Ok(Action::View),
            Some("follow") => Ok(Action::Follow {
                related_id: related_id(self.user_id)?,
            }),
            Some("unfollow") => Ok(Action::Unfollow {
                related_id: related_id(self.user_id)?,
            }),
            Some(other) => Err(DispatchError::UnrecognizedAction(other.to_string())),
            None => Err(DispatchError::UnrecognizedAction(String::new())),
        }
    }
}

// The id is not validated here: follow checks that the user exists and
// unfollow checks membership, whatever characters the id holds.
fn related_id(user_id: Option<Value>) -> DispatchResult<UserId> {
    match user_id {
        Some(Value::String(id)) => Ok(UserId::new(id)),
        Some(other) => Err(DispatchError::RelatedUserInvalid(other.to_string())),
        None => Err(DispatchError::RelatedUserInvalid(String::new())),
    }
}
