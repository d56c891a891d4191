//! Repository for the `messages` table.
//!
//! Every operation is a single parameterized statement; no operation opens
//! a transaction. Update/delete races resolve last-writer-wins at the store.

use relay_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{CreateMessage, Message, UpdateMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sender_id, recipient_id, body, created_at, updated_at";

/// Provides CRUD operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (sender_id, recipient_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(input.sender_id)
            .bind(input.recipient_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a message by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every message, most recent id first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY id DESC");
        sqlx::query_as::<_, Message>(&query).fetch_all(pool).await
    }

    /// List messages where the given user is sender or recipient, most
    /// recent id first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE sender_id = $1 OR recipient_id = $1
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite all mutable fields of a message.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateMessage,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET
                sender_id = $2,
                recipient_id = $3,
                body = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(input.sender_id)
            .bind(input.recipient_id)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a message. Only non-`None` fields in `input` are
    /// applied; the rest keep their stored values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMessage,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET
                sender_id = COALESCE($2, sender_id),
                recipient_id = COALESCE($3, recipient_id),
                body = COALESCE($4, body),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(input.sender_id)
            .bind(input.recipient_id)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
