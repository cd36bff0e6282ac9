//! The one mutable reference in the system: the handle every request
//! reads and every successful write replaces.

use std::sync::{PoisonError, RwLock};

use follows_store::Handle;

/// Owner of the process-wide current [`Handle`].
///
/// Readers always get a complete handle. Writers are serialized: an
/// [`CurrentHandle::update`] holds the write lock from reading the current
/// handle until the new one is published, so a concurrent write can never
/// be silently discarded. A failed update publishes nothing.
#[derive(Debug)]
pub struct CurrentHandle {
    handle: RwLock<Handle>,
}

impl CurrentHandle {
    pub fn new(initial: Handle) -> Self {
        Self {
            handle: RwLock::new(initial),
        }
    }

    /// The currently published handle.
    pub fn load(&self) -> Handle {
        // A poisoned lock still holds a complete handle; handles are never
        // mutated in place.
        self.handle
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Compute a new handle from the current one and publish it.
    ///
    /// Returns the published handle, or `f`'s error with the current handle
    /// left in place.
    pub fn update<E>(&self, f: impl FnOnce(&Handle) -> Result<Handle, E>) -> Result<Handle, E> {
        let mut current = self.handle.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&current)?;
        *current = next.clone();
        Ok(next)
    }

    /// Publish `new` only if `expected` is still the current handle.
    ///
    /// On conflict the handle that is actually current is returned.
    pub fn compare_and_swap(&self, expected: &Handle, new: Handle) -> Result<(), Handle> {
        let mut current = self.handle.write().unwrap_or_else(PoisonError::into_inner);
        if !current.same_as(expected) {
            return Err(current.clone());
        }
        *current = new;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use follows_store::{SeededUserStore, UserStore};
    use follows_types::User;
    use std::sync::Arc;
    use std::thread;

    fn bump(store: &SeededUserStore, handle: &Handle) -> Handle {
        let carl = store.user_by_id(handle, "carl").unwrap();
        store.set_user(handle, carl.viewed())
    }

    #[test]
    fn update_publishes_on_success() {
        let store = SeededUserStore::default();
        let current = CurrentHandle::new(store.initial_handle());
        let published = current.update(|h| Ok::<_, ()>(bump(&store, h))).unwrap();
        assert!(current.load().same_as(&published));
        assert_eq!(store.user_by_id(&current.load(), "carl").unwrap().view_count, 1);
    }

    #[test]
    fn update_keeps_handle_on_error() {
        let store = SeededUserStore::default();
        let current = CurrentHandle::new(store.initial_handle());
        let before = current.load();
        let result = current.update(|_| Err::<Handle, _>("nope"));
        assert_eq!(result.unwrap_err(), "nope");
        assert!(current.load().same_as(&before));
    }

    #[test]
    fn compare_and_swap_detects_conflict() {
        let store = SeededUserStore::default();
        let current = CurrentHandle::new(store.initial_handle());
        let seen = current.load();

        current.update(|h| Ok::<_, ()>(bump(&store, h))).unwrap();

        let stale = store.set_user(&seen, User::new("hugh").with_view_count(9));
        let actual = current.compare_and_swap(&seen, stale).unwrap_err();
        assert_eq!(store.user_by_id(&actual, "carl").unwrap().view_count, 1);
        assert_eq!(store.user_by_id(&current.load(), "hugh").unwrap().view_count, 0);
    }

    #[test]
    fn compare_and_swap_succeeds_when_current() {
        let store = SeededUserStore::default();
        let current = CurrentHandle::new(store.initial_handle());
        let seen = current.load();
        let next = bump(&store, &seen);
        current.compare_and_swap(&seen, next.clone()).unwrap();
        assert!(current.load().same_as(&next));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let store = Arc::new(SeededUserStore::default());
        let current = Arc::new(CurrentHandle::new(store.initial_handle()));

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let current = Arc::clone(&current);
                thread::spawn(move || {
                    for _ in 0..25 {
                        current.update(|h| Ok::<_, ()>(bump(&store, h))).unwrap();
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().expect("thread should not panic");
        }

        assert_eq!(store.user_by_id(&current.load(), "carl").unwrap().view_count, 200);
    }
}
