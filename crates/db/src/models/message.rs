//! Message entity model and DTOs.

use relay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a message, also used by replace (same full field set).
#[derive(Debug)]
pub struct CreateMessage {
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub body: String,
}

/// DTO for partially updating a message. Absent fields keep their stored
/// values (COALESCE merge in the repository).
#[derive(Debug, Default)]
pub struct UpdateMessage {
    pub sender_id: Option<DbId>,
    pub recipient_id: Option<DbId>,
    pub body: Option<String>,
}
