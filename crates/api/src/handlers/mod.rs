//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input via `relay_core`, delegate persistence to the
//! repositories in `relay_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod messages;
