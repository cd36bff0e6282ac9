use follows_types::User;

use crate::snapshot::Handle;

/// Handle-based user store.
///
/// All implementations must satisfy these invariants:
/// - `initial_handle` is deterministic and performs no I/O.
/// - Reads never modify the handle they are given.
/// - `set_user` is copy-on-write: the handle passed in keeps observing the
///   pre-write population, and the returned handle observes the write.
/// - Absence is reported as `None`, never as an error.
pub trait UserStore: Send + Sync {
    /// The seed snapshot. Returns an equal handle on every call.
    fn initial_handle(&self) -> Handle;

    /// Every user in `handle`, in insertion order.
    fn users(&self, handle: &Handle) -> Vec<User> {
        handle.snapshot().users().cloned().collect()
    }

    /// The user with `id` in `handle`, if any.
    fn user_by_id(&self, handle: &Handle, id: &str) -> Option<User> {
        handle.snapshot().get(id).cloned()
    }

    /// A new handle with `user` inserted, or replacing the entry with the
    /// same id.
    fn set_user(&self, handle: &Handle, user: User) -> Handle;

    /// Number of users in `handle`.
    fn len(&self, handle: &Handle) -> usize {
        handle.snapshot().len()
    }
}
