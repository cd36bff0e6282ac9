//! Foundation types for Follows.
//!
//! This crate provides the value types shared by every other Follows crate:
//! user identities, user records, and the public projections handed out by
//! the read side. Every other Follows crate depends on `follows-types`.
//!
//! # Key Types
//!
//! - [`UserId`] -- Stable, immutable identifier of a user
//! - [`User`] -- Full user record, including the ordered following list
//! - [`PublicUser`] -- A user without its following list
//! - [`Profile`] -- A user together with the users it follows, one hop deep

pub mod error;
pub mod id;
pub mod profile;
pub mod user;

pub use error::{TypeError, TypeResult};
pub use id::UserId;
pub use profile::{Profile, PublicUser};
pub use user::User;
