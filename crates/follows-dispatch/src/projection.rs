//! Read-side projections.
//!
//! Follow edges are not foreign-key checked, so a profile silently drops
//! any followed id that no longer resolves instead of failing the read.

use follows_store::{Handle, UserStore};
use follows_types::{Profile, PublicUser};

/// `id`'s profile with its following list resolved one hop deep.
pub fn profile_with_following(store: &dyn UserStore, handle: &Handle, id: &str) -> Option<Profile> {
    let user = store.user_by_id(handle, id)?;
    let following = user
        .following_ids
        .iter()
        .filter_map(|f| store.user_by_id(handle, f.as_str()))
        .map(PublicUser::from)
        .collect();
    Some(Profile::new(&user, following))
}

/// Every user in `handle`, in listing order, without following lists.
pub fn public_users(store: &dyn UserStore, handle: &Handle) -> Vec<PublicUser> {
    store.users(handle).into_iter().map(PublicUser::from).collect()
}
