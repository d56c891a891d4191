//! Route definitions for the `/messages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`. All require a bearer token (enforced by
/// handler extractors).
///
/// ```text
/// GET    /        -> list_messages (admin: all rows; user: own rows)
/// POST   /        -> create_message
/// GET    /admin   -> list_all_messages (admin role required)
/// GET    /{id}    -> get_message
/// PUT    /{id}    -> replace_message
/// PATCH  /{id}    -> update_message
/// DELETE /{id}    -> delete_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/admin", get(messages::list_all_messages))
        .route(
            "/{id}",
            get(messages::get_message)
                .put(messages::replace_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
}
