/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /users/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Generate a JWT valid for 24 hours
 *
 * # Security
 *
 * - An unknown email and a wrong password return the same 401 message,
 *   so callers cannot enumerate accounts
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

const BAD_CREDENTIALS: &str = "invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - storage or token-signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| ApiError::unauthenticated(BAD_CREDENTIALS))?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|err| ApiError::internal(format!("password verification failed: {err}")))?;
    if !valid {
        tracing::warn!("Failed login attempt for {}", user.email);
        return Err(ApiError::unauthenticated(BAD_CREDENTIALS));
    }

    let token = create_token(&state.jwt, user.id, user.email.clone())
        .map_err(|err| ApiError::internal(format!("token signing failed: {err}")))?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(TokenResponse { token }))
}
