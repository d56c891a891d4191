pub mod auth;
pub mod health;
pub mod messages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /messages                      list (filtered), create
/// /messages/admin                unfiltered list (admin only)
/// /messages/{id}                 get, replace, partial-update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/messages", messages::router())
}
