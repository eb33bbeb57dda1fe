/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /users/register.
 *
 * # Registration Process
 *
 * 1. Validate email shape and password length
 * 2. Hash the password with bcrypt
 * 3. Insert the user row
 * 4. Return the generated user identifier
 *
 * # Validation
 *
 * - Email must contain '@'
 * - Password must be at least 8 characters
 * - A duplicate email surfaces the unique violation as a 400, not a 500
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::users::{create_user, is_unique_violation};
use crate::backend::error::ApiError;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Basic email shape check
///
/// Deliverability is not our problem; a stray '@' between non-empty halves
/// is enough to catch obviously malformed input.
pub fn is_well_formed_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed email, short password, or duplicate email
/// * `500 Internal Server Error` - hashing or storage failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    if !is_well_formed_email(&request.email) {
        return Err(ApiError::validation("invalid email address"));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|err| ApiError::internal(format!("password hashing failed: {err}")))?;

    let user = create_user(&pool, &request.email, &password_hash)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                ApiError::validation("email already registered")
            } else {
                ApiError::Persistence(err)
            }
        })?;

    tracing::info!("User registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user created".to_string(),
            user_id: user.id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_emails() {
        assert!(is_well_formed_email("user@example.com"));
        assert!(is_well_formed_email("a@b"));
    }

    #[test]
    fn test_malformed_emails() {
        assert!(!is_well_formed_email("no-at-sign"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("user@"));
        assert!(!is_well_formed_email(""));
    }
}
