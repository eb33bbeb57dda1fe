/**
 * Letter Creation Service
 *
 * This module orchestrates letter creation: rate check and insertion run
 * inside a single transaction with the sender's user row locked for the
 * duration.
 *
 * # State Machine
 *
 * `Start → LockUser → CheckRate → {Denied → Abort} |
 * {Allowed → Insert → UpdateTimestamp → Commit}`
 *
 * Any failure after the lock rolls the whole transaction back: a letter
 * without its timestamp update, or vice versa, is never observable. The
 * same holds if the caller disconnects mid-flight - dropping the
 * transaction rolls it back.
 */

use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::letters::rate_limit::{self, RateDecision};
use crate::backend::letters::store::{self, Letter};
use crate::backend::middleware::auth::AuthenticatedUser;

/// Creation payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLetterRequest {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

/// Validate the creation payload
///
/// The recipient email is free text by design (letters may address
/// anyone, registered or not), so only emptiness is rejected.
fn validate(request: &CreateLetterRequest) -> Result<(), ApiError> {
    if request.recipient_email.trim().is_empty() {
        return Err(ApiError::validation("recipientEmail must not be empty"));
    }
    if request.subject.trim().is_empty() {
        return Err(ApiError::validation("subject must not be empty"));
    }
    if request.body.trim().is_empty() {
        return Err(ApiError::validation("body must not be empty"));
    }
    Ok(())
}

/// Create a letter on behalf of an authenticated sender
///
/// # Errors
///
/// * `Validation` - empty payload field
/// * `RateLimited` - the sender created a letter less than 60 seconds ago;
///   carries the remaining wait in whole seconds
/// * `Persistence` - storage failure at any step (fully rolled back)
pub async fn create_letter(
    pool: &PgPool,
    sender: &AuthenticatedUser,
    request: &CreateLetterRequest,
) -> Result<Letter, ApiError> {
    validate(request)?;

    let mut tx = pool.begin().await?;
    let now = Utc::now();

    // Takes the sender's row lock; held until commit or rollback.
    if let RateDecision::Denied {
        retry_after_seconds,
    } = rate_limit::check_and_reserve(&mut tx, sender.user_id, now).await?
    {
        tracing::info!(
            "Rate-limited letter creation for {} ({retry_after_seconds}s remaining)",
            sender.email
        );
        return Err(ApiError::RateLimited {
            retry_after_seconds,
        });
    }

    let letter = store::insert(
        &mut tx,
        sender.user_id,
        &request.recipient_email,
        &request.subject,
        &request.body,
    )
    .await?;

    rate_limit::record_send(&mut tx, sender.user_id, letter.created_at).await?;

    tx.commit().await?;

    tracing::info!("Letter {} created by {}", letter.id, sender.email);
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(recipient: &str, subject: &str, body: &str) -> CreateLetterRequest {
        CreateLetterRequest {
            recipient_email: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(validate(&request("mayor@example.com", "Potholes", "Please fix them.")).is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(validate(&request("", "Potholes", "Please fix them.")).is_err());
        assert!(validate(&request("mayor@example.com", "  ", "Please fix them.")).is_err());
        assert!(validate(&request("mayor@example.com", "Potholes", "")).is_err());
    }
}
