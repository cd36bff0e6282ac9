//! Public projections of [`User`] records.
//!
//! The read side never exposes `followingIds` directly. Listings hand out
//! [`PublicUser`] values and single-user reads hand out a [`Profile`], which
//! resolves the following list exactly one hop deep.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::user::User;

/// A user without its following list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub view_count: u64,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            view_count: user.view_count,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            view_count: user.view_count,
        }
    }
}

/// A user together with the public fields of everyone it follows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub view_count: u64,
    pub following: Vec<PublicUser>,
}

impl Profile {
    pub fn new(user: &User, following: Vec<PublicUser>) -> Self {
        Self {
            id: user.id.clone(),
            view_count: user.view_count,
            following,
        }
    }

    pub fn following_ids(&self) -> impl Iterator<Item = &UserId> {
        self.following.iter().map(|u| &u.id)
    }
}
