//! Copy-on-write user storage for Follows.
//!
//! All user state lives in immutable [`Snapshot`]s reached through opaque
//! [`Handle`]s. Reads take a handle and never modify it; writes take a
//! handle and return a new one, so every handle ever produced keeps
//! observing exactly the population it was created with.
//!
//! # Storage Backends
//!
//! All backends implement the [`UserStore`] trait:
//!
//! - [`SeededUserStore`] -- in-memory store starting from a fixed seed
//!   population (the built-in one, or a snapshot file)
//!
//! # Design Rules
//!
//! 1. Handles are immutable once produced. A write clones the snapshot.
//! 2. Absence is a normal return value (`None`), never an error.
//! 3. Listing order is the insertion order of the population.
//! 4. Handles have a portable JSON text form keyed by user id.
//! 5. The store holds no "current" handle -- callers thread handles
//!    explicitly.

pub mod error;
pub mod memory;
pub mod seed;
pub mod snapshot;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::SeededUserStore;
pub use seed::default_population;
pub use snapshot::{Handle, Snapshot};
pub use traits::UserStore;
