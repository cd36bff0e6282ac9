//! Action dispatch and read-side projection for Follows.
//!
//! The [`Dispatcher`] turns a client intent ([`Action`]) against one target
//! user into a new [`follows_store::Handle`], or a classified
//! [`DispatchError`]. It is stateless between calls: the handle to act on
//! is passed in and the resulting handle is passed back.
//!
//! # Modules
//!
//! - [`action`] -- The [`Action`] variant
//! - [`error`] -- The [`DispatchError`] taxonomy
//! - [`dispatcher`] -- [`Dispatcher::apply_action`]
//! - [`projection`] -- Profile and listing projections

pub mod action;
pub mod dispatcher;
pub mod error;
pub mod projection;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
