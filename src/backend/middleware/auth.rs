/**
 * Authentication Extractors
 *
 * This module resolves bearer tokens into a typed user identity. Two
 * extractors cover the two kinds of routes:
 *
 * - `AuthUser` - required identity; any failure is a 401 before the
 *   handler body runs. Used by letter creation, signature toggling, and
 *   the current-user endpoint.
 * - `OptionalViewer` - best-effort identity for public routes that
 *   personalize their response (the letter detail view's `isSigned`
 *   flag). A missing or invalid token degrades to anonymous, never an
 *   error.
 *
 * The transactional core never sees a raw token; it receives the
 * resolved `AuthenticatedUser` value.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user identity resolved from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Pull the raw token out of the `Authorization: Bearer <token>` header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

/// Axum extractor for a required authenticated user
///
/// Verifies the token signature and expiry, then confirms the user row
/// still exists so a deleted account cannot keep acting through an
/// unexpired token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::unauthenticated("missing or malformed authorization header"))?;

        let claims = verify_token(&state.jwt, token).map_err(|err| {
            tracing::warn!("Rejected token: {err}");
            ApiError::unauthenticated("invalid or expired token")
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::unauthenticated("invalid token subject"))?;

        let user = get_user_by_id(&state.db_pool, user_id)
            .await?
            .ok_or_else(|| ApiError::unauthenticated("unknown user"))?;

        Ok(AuthUser(AuthenticatedUser {
            user_id: user.id,
            email: user.email,
        }))
    }
}

/// Axum extractor for an optional viewer identity
///
/// Yields `Some(user_id)` when a valid bearer token accompanies the
/// request, `None` otherwise. Never rejects.
#[derive(Clone, Debug)]
pub struct OptionalViewer(pub Option<Uuid>);

impl FromRequestParts<AppState> for OptionalViewer {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let viewer = bearer_token(parts)
            .and_then(|token| verify_token(&state.jwt, token).ok())
            .and_then(|claims| Uuid::parse_str(&claims.sub).ok());

        Ok(OptionalViewer(viewer))
    }
}
