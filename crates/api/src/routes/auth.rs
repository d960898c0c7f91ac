//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /users          -> register
/// GET  /users/me       -> me (requires auth)
/// POST /token/login    -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(auth::register))
        .route("/users/me", get(auth::me))
        .route("/token/login", post(auth::login))
}
