//! Signature route handler for POST /letters/{id}/toggle-signature

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::letters::handlers::parse_letter_id;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::signatures::service::{self, ToggleOutcome};

/// Toggle the caller's signature on a letter
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid credentials
/// * `400 Bad Request` - malformed letter identifier
/// * `500 Internal Server Error` - storage failure (rolled back)
pub async fn toggle_signature(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    let letter_id = parse_letter_id(&id)?;
    let outcome = service::toggle_signature(&pool, user.user_id, letter_id).await?;
    Ok(Json(outcome))
}
