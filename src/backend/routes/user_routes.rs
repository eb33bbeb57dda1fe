//! User route configuration

use axum::{routing::get, routing::post, Router};

use crate::backend::auth::{login, me, register};
use crate::backend::server::state::AppState;

/// Configure user routes
///
/// Registration and login are public; `GET /users/me` requires a valid
/// bearer token.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
}
