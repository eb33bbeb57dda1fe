//! Current-user handler for GET /users/me
//!
//! Echoes the identity resolved by the `AuthUser` extractor; useful for
//! clients validating a stored token.

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::auth::AuthUser;

/// Return the authenticated caller's id and email
pub async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.user_id,
        email: user.email,
    })
}
