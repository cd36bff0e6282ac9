use std::fmt;
use std::sync::Arc;

use follows_types::{User, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// The complete user population at one point in time.
///
/// Entries keep insertion order. Replacing an existing user keeps its
/// position; inserting a new id appends it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    users_by_id: IndexMap<UserId, User>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from users in order. A later duplicate id replaces
    /// the earlier entry in place.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut snapshot = Self::new();
        for user in users {
            snapshot.insert(user);
        }
        snapshot
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users_by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users_by_id.contains_key(id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users_by_id.values()
    }

    pub fn len(&self) -> usize {
        self.users_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users_by_id.is_empty()
    }

    fn insert(&mut self, user: User) {
        self.users_by_id.insert(user.id.clone(), user);
    }

    fn validate(&self) -> StoreResult<()> {
        for (key, user) in &self.users_by_id {
            if key != &user.id {
                return Err(StoreError::KeyMismatch {
                    key: key.to_string(),
                    id: user.id.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Opaque reference to one immutable [`Snapshot`].
///
/// Cloning a handle is cheap and yields the same snapshot. Two handles are
/// equal when their snapshots have equal content.
#[derive(Clone, PartialEq, Eq)]
pub struct Handle(Arc<Snapshot>);

impl Handle {
    pub fn new(snapshot: Snapshot) -> Self {
        Self(Arc::new(snapshot))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.0
    }

    /// Whether both handles refer to the very same snapshot allocation.
    pub fn same_as(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// A new handle whose snapshot has `user` inserted or replaced.
    /// `self` is left untouched.
    pub fn with_user(&self, user: User) -> Self {
        let mut snapshot = Snapshot::clone(&self.0);
        snapshot.insert(user);
        Self::new(snapshot)
    }

    /// Encode as portable JSON text: `{"usersById": {"<id>": {...}}}`.
    pub fn to_text(&self) -> StoreResult<String> {
        serde_json::to_string(self.snapshot())
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Pretty-printed variant of [`Handle::to_text`].
    pub fn to_text_pretty(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self.snapshot())
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Decode a handle from its text form.
    ///
    /// Fails if the text is not a snapshot or if any entry is keyed under a
    /// different id than the user it holds.
    pub fn from_text(text: &str) -> StoreResult<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(text).map_err(|e| StoreError::Serialization(e.to_string()))?;
        snapshot.validate()?;
        Ok(Self::new(snapshot))
    }
}

impl From<Snapshot> for Handle {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("user_count", &self.0.len())
            .finish()
    }
}
