use std::fmt;

use follows_types::UserId;
use serde::{Deserialize, Serialize};

/// A client intent against one target user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// Increment the target's view count.
    View,
    /// Add `related_id` to the tail of the target's following list.
    Follow {
        #[serde(rename = "relatedId")]
        related_id: UserId,
    },
    /// Remove `related_id` from the target's following list.
    Unfollow {
        #[serde(rename = "relatedId")]
        related_id: UserId,
    },
}

impl Action {
    pub fn follow(related_id: impl Into<UserId>) -> Self {
        Self::Follow {
            related_id: related_id.into(),
        }
    }

    pub fn unfollow(related_id: impl Into<UserId>) -> Self {
        Self::Unfollow {
            related_id: related_id.into(),
        }
    }

    /// The wire name of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Follow { .. } => "follow",
            Self::Unfollow { .. } => "unfollow",
        }
    }

    pub fn related_id(&self) -> Option<&UserId> {
        match self {
            Self::View => None,
            Self::Follow { related_id } | Self::Unfollow { related_id } => Some(related_id),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.related_id() {
            Some(id) => write!(f, "{}:{id}", self.kind()),
            None => f.write_str(self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Action::View.kind(), "view");
        assert_eq!(Action::follow("hugh").kind(), "follow");
        assert_eq!(Action::unfollow("hugh").kind(), "unfollow");
    }

    #[test]
    fn display() {
        assert_eq!(Action::View.to_string(), "view");
        assert_eq!(Action::follow("hugh").to_string(), "follow:hugh");
    }

    #[test]
    fn tagged_serde() {
        let json = serde_json::to_value(Action::follow("hugh")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "follow", "relatedId": "hugh" }));
        let back: Action = serde_json::from_value(serde_json::json!({ "kind": "view" })).unwrap();
        assert_eq!(back, Action::View);
    }
}
