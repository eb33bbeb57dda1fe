/**
 * Letter Route Handlers
 *
 * HTTP handlers for the letter endpoints:
 *
 * - `GET /letters` - search with optional text/date filters
 * - `GET /letters/{id}` - single letter with aggregate (viewer-aware)
 * - `POST /letters` - authenticated, rate-limited creation
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::letters::query::{self, SearchParams};
use crate::backend::letters::service::{self, CreateLetterRequest};
use crate::backend::letters::store::{self, Letter, LetterWithSignatures};
use crate::backend::middleware::auth::{AuthUser, OptionalViewer};

/// Search letters
///
/// # Errors
///
/// * `400 Bad Request` - unknown search field with a non-empty query
/// * `500 Internal Server Error` - storage failure
pub async fn search_letters(
    State(pool): State<PgPool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<LetterWithSignatures>>, ApiError> {
    let compiled = query::compile(&params)?;
    let letters = store::search(&pool, &compiled).await?;
    Ok(Json(letters))
}

/// Fetch a single letter with its aggregate
///
/// When the request carries a valid bearer token, `isSigned` reflects
/// that viewer; otherwise it is false.
///
/// # Errors
///
/// * `400 Bad Request` - malformed letter identifier
/// * `404 Not Found` - no such letter
pub async fn get_letter(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    OptionalViewer(viewer): OptionalViewer,
) -> Result<Json<LetterWithSignatures>, ApiError> {
    let letter_id = parse_letter_id(&id)?;
    let letter = store::get_by_id(&pool, letter_id, viewer)
        .await?
        .ok_or(ApiError::NotFound("letter"))?;
    Ok(Json(letter))
}

/// Create a letter (authenticated)
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid credentials
/// * `429 Too Many Requests` - cooldown not elapsed, with remaining wait
pub async fn create_letter(
    State(pool): State<PgPool>,
    AuthUser(sender): AuthUser,
    Json(request): Json<CreateLetterRequest>,
) -> Result<(StatusCode, Json<Letter>), ApiError> {
    let letter = service::create_letter(&pool, &sender, &request).await?;
    Ok((StatusCode::CREATED, Json(letter)))
}

/// Parse a path identifier into a letter UUID
pub fn parse_letter_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("malformed letter id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_id_accepts_uuids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_letter_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_letter_id_rejects_garbage() {
        assert!(parse_letter_id("not-a-uuid").is_err());
        assert!(parse_letter_id("").is_err());
    }
}
