//! Authentication, authorization, and body-extraction middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`json::ApiJson`] -- JSON extractor rejecting bad bodies with 400.

pub mod auth;
pub mod json;
pub mod rbac;
