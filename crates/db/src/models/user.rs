//! User entity model and DTOs.

use relay_core::roles::role_name;
use relay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Stored role discriminant: 0 = administrator, nonzero = regular user.
    pub role: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Resolved role name for token claims and API responses.
    pub fn role_name(&self) -> &'static str {
        role_name(self.role)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Resolved role name (`"admin"` or `"user"`).
    pub role: &'static str,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role_name(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The email is expected to be normalized
/// (trimmed, lowercased) and the password already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: i16,
}
