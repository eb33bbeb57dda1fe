//! Letter and signature route configuration

use axum::{routing::get, routing::post, Router};

use crate::backend::letters::handlers::{create_letter, get_letter, search_letters};
use crate::backend::server::state::AppState;
use crate::backend::signatures::handlers::toggle_signature;

/// Configure letter routes
///
/// `GET /letters` and `GET /letters/{id}` are public; `POST /letters` and
/// the toggle route require authentication via the `AuthUser` extractor.
pub fn configure_letter_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/letters", get(search_letters).post(create_letter))
        .route("/letters/{id}", get(get_letter))
        .route("/letters/{id}/toggle-signature", post(toggle_signature))
}
