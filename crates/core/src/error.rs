//! Domain error taxonomy shared by all crates.

use crate::types::DbId;

/// Errors produced by domain logic, independent of any transport.
///
/// The API crate maps each variant to an HTTP status; repositories and
/// handlers construct these directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist -- or the caller is not allowed to know
    /// whether it exists.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
