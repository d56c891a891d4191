//! Handlers for the `/messages` resource.
//!
//! Every handler requires authentication via [`AuthUser`]. Single-record
//! operations apply the per-record policy from `relay_core::messages`:
//! a record the caller may not act on is reported exactly like an absent
//! one (404), so message ids cannot be probed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use relay_core::error::CoreError;
use relay_core::messages::{
    check_access, validate_body, validate_message_id, validate_partial_update,
    validate_participants, MessageAccess,
};
use relay_core::types::DbId;
use relay_db::models::message::{CreateMessage, Message, UpdateMessage};
use relay_db::repositories::MessageRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ApiJson;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /messages` and `PUT /messages/{id}`.
#[derive(Debug, Deserialize)]
pub struct MessageBodyRequest {
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub body: String,
}

/// Request body for `PATCH /messages/{id}`. All fields optional; absent
/// fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub sender_id: Option<DbId>,
    pub recipient_id: Option<DbId>,
    pub body: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/messages
///
/// List messages visible to the caller, most recent id first. Regular
/// users see rows where they are sender or recipient; administrators see
/// every row.
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Message>>> {
    let messages = if auth.is_admin() {
        MessageRepo::list_all(&state.pool).await?
    } else {
        MessageRepo::list_for_user(&state.pool, auth.user_id).await?
    };
    Ok(Json(messages))
}

/// GET /api/v1/messages/admin
///
/// Unfiltered listing, admin role required (403 otherwise).
pub async fn list_all_messages(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Message>>> {
    let messages = MessageRepo::list_all(&state.pool).await?;
    Ok(Json(messages))
}

/// GET /api/v1/messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Message>> {
    let message = fetch_accessible(&state, &auth, id).await?;
    Ok(Json(message))
}

/// POST /api/v1/messages
///
/// Create a message. Body must be non-empty, both participant ids must be
/// positive, and a user may not message themselves.
pub async fn create_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiJson(input): ApiJson<MessageBodyRequest>,
) -> AppResult<(StatusCode, Json<Message>)> {
    validate_participants(input.sender_id, input.recipient_id)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_body(&input.body).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let create_dto = CreateMessage {
        sender_id: input.sender_id,
        recipient_id: input.recipient_id,
        body: input.body,
    };

    let message = MessageRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// PUT /api/v1/messages/{id}
///
/// Replace all mutable fields. Same field validation as create.
pub async fn replace_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<MessageBodyRequest>,
) -> AppResult<Json<Message>> {
    validate_participants(input.sender_id, input.recipient_id)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_body(&input.body).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Policy check against the stored row before touching it.
    fetch_accessible(&state, &auth, id).await?;

    let replace_dto = CreateMessage {
        sender_id: input.sender_id,
        recipient_id: input.recipient_id,
        body: input.body,
    };

    let message = MessageRepo::replace(&state.pool, id, &replace_dto)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(message))
}

/// PATCH /api/v1/messages/{id}
///
/// Partially update a message: at least one field must be supplied, and
/// absent fields keep their stored values.
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateMessageRequest>,
) -> AppResult<Json<Message>> {
    validate_partial_update(input.sender_id, input.recipient_id, input.body.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    fetch_accessible(&state, &auth, id).await?;

    let update_dto = UpdateMessage {
        sender_id: input.sender_id,
        recipient_id: input.recipient_id,
        body: input.body,
    };

    let message = MessageRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(message))
}

/// DELETE /api/v1/messages/{id}
///
/// Remove a message. Returns 204 No Content on success.
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    fetch_accessible(&state, &auth, id).await?;

    let deleted = MessageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the path id, load the message, and apply the per-record policy.
///
/// Absent rows and policy denials produce the same 404 error.
async fn fetch_accessible(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<Message> {
    validate_message_id(id).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let message = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    match check_access(
        auth.user_id,
        auth.is_admin(),
        message.sender_id,
        message.recipient_id,
    ) {
        MessageAccess::Allowed => Ok(message),
        MessageAccess::NotFoundForCaller => Err(not_found(id)),
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Message",
        id,
    })
}
