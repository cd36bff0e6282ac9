//! HTTP server for Follows.
//!
//! Thin transport over [`follows_dispatch`]: routes parse the path and body,
//! read or replace the process-wide [`CurrentHandle`], and map dispatch
//! failures to bare status codes.
//!
//! | Route | Success | Failures |
//! |---|---|---|
//! | `GET /users` | 200, list of users | |
//! | `GET /users/{id}` | 200, profile | 404 |
//! | `PATCH /users/{id}` | 200, empty | 404, 406, 400 |

pub mod config;
pub mod current;
pub mod error;
pub mod handler;
pub mod payload;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use current::CurrentHandle;
pub use error::{ApiError, ServerError, ServerResult};
pub use payload::ActionRequest;
pub use server::FollowsServer;
pub use state::AppState;
