use std::fs;
use std::path::Path;

use follows_types::User;
use tracing::{debug, trace};

use crate::error::StoreResult;
use crate::seed::default_population;
use crate::snapshot::{Handle, Snapshot};
use crate::traits::UserStore;

/// In-memory store that starts from a fixed seed snapshot.
///
/// The store itself holds only the seed; every other snapshot lives in the
/// handles callers pass around.
pub struct SeededUserStore {
    seed: Handle,
}

impl SeededUserStore {
    /// Store seeded from the given snapshot.
    pub fn new(seed: Snapshot) -> Self {
        Self {
            seed: Handle::new(seed),
        }
    }

    /// Store seeded from a handle text file, such as one written by
    /// [`Handle::to_text`].
    pub fn from_seed_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let seed = Handle::from_text(&text)?;
        debug!(path = %path.display(), users = seed.snapshot().len(), "loaded seed snapshot");
        Ok(Self { seed })
    }
}

impl Default for SeededUserStore {
    fn default() -> Self {
        Self::new(default_population())
    }
}

impl UserStore for SeededUserStore {
    fn initial_handle(&self) -> Handle {
        self.seed.clone()
    }

    fn set_user(&self, handle: &Handle, user: User) -> Handle {
        trace!(user = %user.id, "writing user");
        handle.with_user(user)
    }
}

impl std::fmt::Debug for SeededUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededUserStore")
            .field("seed_users", &self.seed.snapshot().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use proptest::prelude::*;
    use std::io::Write;

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    #[test]
    fn initial_handle_is_deterministic() {
        let store = SeededUserStore::default();
        assert_eq!(store.initial_handle(), store.initial_handle());
        assert_eq!(
            SeededUserStore::default().initial_handle(),
            SeededUserStore::default().initial_handle()
        );
    }

    #[test]
    fn users_in_insertion_order() {
        let store = SeededUserStore::default();
        let ids: Vec<_> = store
            .users(&store.initial_handle())
            .into_iter()
            .map(|u| u.id.into_string())
            .collect();
        assert_eq!(ids, vec!["jimmy", "carl", "hugh", "cindy", "libby"]);
    }

    #[test]
    fn user_by_id_missing_is_none() {
        let store = SeededUserStore::default();
        assert!(store.user_by_id(&store.initial_handle(), "sheen").is_none());
    }

    #[test]
    fn user_by_id_found() {
        let store = SeededUserStore::default();
        let carl = store.user_by_id(&store.initial_handle(), "carl").unwrap();
        assert_eq!(carl.following_ids, vec!["jimmy"]);
        assert_eq!(carl.view_count, 0);
    }

    // -----------------------------------------------------------------------
    // Copy-on-write
    // -----------------------------------------------------------------------

    #[test]
    fn set_user_does_not_touch_old_handle() {
        let store = SeededUserStore::default();
        let h0 = store.initial_handle();
        let h1 = store.set_user(&h0, User::new("carl").with_view_count(7));

        assert_eq!(store.user_by_id(&h1, "carl").unwrap().view_count, 7);
        assert_eq!(store.user_by_id(&h0, "carl").unwrap().view_count, 0);
        assert_eq!(store.initial_handle(), h0);
    }

    #[test]
    fn set_user_inserts_new_id() {
        let store = SeededUserStore::default();
        let h0 = store.initial_handle();
        let h1 = store.set_user(&h0, User::new("sheen"));

        assert!(store.user_by_id(&h1, "sheen").is_some());
        assert!(store.user_by_id(&h0, "sheen").is_none());
        assert_eq!(store.len(&h1), store.len(&h0) + 1);
        assert_eq!(store.users(&h1).last().unwrap().id, "sheen");
    }

    // -----------------------------------------------------------------------
    // Seed files
    // -----------------------------------------------------------------------

    #[test]
    fn seed_file_roundtrip() {
        let exported = SeededUserStore::default()
            .initial_handle()
            .with_user(User::new("carl").with_view_count(3));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(exported.to_text().unwrap().as_bytes()).unwrap();

        let store = SeededUserStore::from_seed_file(file.path()).unwrap();
        assert_eq!(store.initial_handle(), exported);
        assert_eq!(store.user_by_id(&store.initial_handle(), "carl").unwrap().view_count, 3);
    }

    #[test]
    fn seed_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SeededUserStore::from_seed_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    fn user_strategy() -> impl Strategy<Value = User> {
        (
            prop::sample::select(vec!["jimmy", "carl", "hugh", "sheen", "nick"]),
            any::<u32>(),
            prop::collection::vec(prop::sample::select(vec!["jimmy", "carl", "hugh"]), 0..3),
        )
            .prop_map(|(id, views, following)| {
                User::new(id)
                    .with_view_count(u64::from(views))
                    .with_following(following)
            })
    }

    proptest! {
        #[test]
        fn copy_on_write_holds(user in user_strategy()) {
            let store = SeededUserStore::default();
            let h0 = store.initial_handle();
            let before = store.user_by_id(&h0, user.id.as_str());

            let h1 = store.set_user(&h0, user.clone());

            prop_assert_eq!(store.user_by_id(&h1, user.id.as_str()), Some(user.clone()));
            prop_assert_eq!(store.user_by_id(&h0, user.id.as_str()), before);
            prop_assert_eq!(h0, store.initial_handle());
        }
    }
}
