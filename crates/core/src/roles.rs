//! Role constants and the stored-role mapping.
//!
//! Users carry a SMALLINT role discriminant in the database: `0` is the
//! administrator role, any other value is a regular user. Tokens carry the
//! role *name* so handlers never re-read the users table per request.

/// Stored discriminant for administrators.
pub const ADMIN_ROLE_CODE: i16 = 0;

/// Stored discriminant for regular users.
pub const USER_ROLE_CODE: i16 = 1;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Map a stored role discriminant to its well-known name.
pub fn role_name(role: i16) -> &'static str {
    if role == ADMIN_ROLE_CODE {
        ROLE_ADMIN
    } else {
        ROLE_USER
    }
}
