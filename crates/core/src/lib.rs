//! Domain logic for the Relay messaging platform.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! id/time types, role constants, message validation, and the per-record
//! authorization policy.

pub mod error;
pub mod messages;
pub mod roles;
pub mod types;
