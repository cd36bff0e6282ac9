use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A user record.
///
/// `User` is a value type: every update returns a new record and leaves the
/// original untouched. `following_ids` is an ordered list without
/// duplicates as long as it is only changed through [`User::followed`] and
/// [`User::unfollowed`]. Following oneself is not rejected here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub view_count: u64,
    pub following_ids: Vec<UserId>,
}

impl User {
    /// A user with no views who follows nobody.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            view_count: 0,
            following_ids: Vec::new(),
        }
    }

    /// Builder-style helper used by seeds and tests.
    pub fn with_following<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<UserId>,
    {
        self.following_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper used by seeds and tests.
    pub fn with_view_count(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    /// Whether `id` is in the following list.
    pub fn follows(&self, id: &str) -> bool {
        self.following_ids.iter().any(|f| f == id)
    }

    /// The record after one more view. Saturates at `u64::MAX`.
    pub fn viewed(&self) -> Self {
        Self {
            view_count: self.view_count.saturating_add(1),
            ..self.clone()
        }
    }

    /// The record after following `id`.
    ///
    /// An id that is already followed is moved to the tail rather than
    /// duplicated.
    pub fn followed(&self, id: &UserId) -> Self {
        let mut following_ids: Vec<UserId> = self
            .following_ids
            .iter()
            .filter(|f| *f != id)
            .cloned()
            .collect();
        following_ids.push(id.clone());
        Self {
            following_ids,
            ..self.clone()
        }
    }

    /// The record with every occurrence of `id` removed from the following
    /// list.
    pub fn unfollowed(&self, id: &str) -> Self {
        Self {
            following_ids: self
                .following_ids
                .iter()
                .filter(|f| *f != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
