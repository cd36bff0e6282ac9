//! Built-in seed population.

use follows_types::User;

use crate::snapshot::Snapshot;

/// The fixed population every [`crate::SeededUserStore::default`] starts
/// from. Every view count is zero.
pub fn default_population() -> Snapshot {
    Snapshot::from_users([
        User::new("jimmy").with_following(["carl"]),
        User::new("carl").with_following(["jimmy"]),
        User::new("hugh").with_following(["jimmy"]),
        User::new("cindy").with_following(["libby"]),
        User::new("libby").with_following(["cindy"]),
    ])
}
