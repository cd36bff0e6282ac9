use std::sync::Arc;

use follows_store::{Handle, UserStore};
use follows_types::{Profile, PublicUser, User, UserId};
use tracing::debug;

use crate::action::Action;
use crate::error::{DispatchError, DispatchResult};
use crate::projection;

/// Applies [`Action`]s to snapshots through a [`UserStore`].
///
/// Each call is one read-modify-write against the handle it is given. The
/// dispatcher never holds on to a handle, so publishing the result is the
/// caller's job.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn UserStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// The store's seed handle.
    pub fn initial_handle(&self) -> Handle {
        self.store.initial_handle()
    }

    /// Look up the target of an action.
    pub fn require_target(&self, handle: &Handle, target_id: &UserId) -> DispatchResult<User> {
        self.store
            .user_by_id(handle, target_id.as_str())
            .ok_or_else(|| DispatchError::TargetNotFound(target_id.clone()))
    }

    /// Apply `action` to `target_id` in `handle` and return the new handle.
    ///
    /// On failure nothing is written and `handle` is the only valid state.
    pub fn apply_action(
        &self,
        handle: &Handle,
        target_id: &UserId,
        action: &Action,
    ) -> DispatchResult<Handle> {
        let result = self
            .require_target(handle, target_id)
            .and_then(|target| self.next_user(handle, &target, action))
            .map(|user| self.store.set_user(handle, user));

        match &result {
            Ok(_) => debug!(user = %target_id, action = %action, "action applied"),
            Err(e) => debug!(user = %target_id, action = %action, error = %e, "action rejected"),
        }
        result
    }

    fn next_user(&self, handle: &Handle, target: &User, action: &Action) -> DispatchResult<User> {
        match action {
            Action::View => Ok(target.viewed()),
            Action::Follow { related_id } => {
                // Follow only needs the related user to exist.
                let related = self
                    .store
                    .user_by_id(handle, related_id.as_str())
                    .ok_or_else(|| DispatchError::RelatedUserInvalid(related_id.to_string()))?;
                Ok(target.followed(&related.id))
            }
            Action::Unfollow { related_id } => {
                // Unfollow needs an existing edge, whether or not the related
                // user still exists.
                if !target.follows(related_id.as_str()) {
                    return Err(DispatchError::RelatedUserInvalid(related_id.to_string()));
                }
                Ok(target.unfollowed(related_id.as_str()))
            }
        }
    }

    /// One user with its followed users resolved, or `None` if absent.
    pub fn profile(&self, handle: &Handle, id: &str) -> Option<Profile> {
        projection::profile_with_following(self.store(), handle, id)
    }

    /// Every user, without following lists.
    pub fn public_users(&self, handle: &Handle) -> Vec<PublicUser> {
        projection::public_users(self.store(), handle)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
