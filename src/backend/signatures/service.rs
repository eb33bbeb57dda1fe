/**
 * Signature Toggle Service
 *
 * This module flips a user's signature on a letter and recounts inside
 * one transaction.
 *
 * # Consistency
 *
 * The existence read, the mutation, and the recount share a transaction:
 * the returned count is exactly the post-toggle state, and a concurrent
 * reader outside the transaction never observes the sequence mid-update.
 * The count is recomputed from the ledger every time rather than kept in
 * a stored counter, so it cannot drift.
 *
 * Toggling is not idempotent - each call flips the state - but each
 * individual transaction is atomic and leaves the ledger consistent.
 * When two transactions race the same transition for one (user, letter)
 * pair, the composite primary key lets at most one of them commit it.
 */

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::signatures::ledger;

/// Post-toggle state returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// Whether the user signs the letter after this toggle
    pub signed: bool,
    /// Live signature count after this toggle
    #[serde(rename = "signatureCount")]
    pub signature_count: i64,
}

/// Toggle a user's signature on a letter
///
/// # Errors
///
/// `Persistence` on any storage failure, including a toggle against a
/// nonexistent letter (foreign-key violation) or a lost race against a
/// concurrent identical transition (unique violation). The transaction
/// rolls back fully in every error path.
pub async fn toggle_signature(
    pool: &PgPool,
    user_id: Uuid,
    letter_id: Uuid,
) -> Result<ToggleOutcome, ApiError> {
    let mut tx = pool.begin().await?;

    let was_signed = ledger::is_signed(&mut tx, user_id, letter_id).await?;
    if was_signed {
        ledger::unsign(&mut tx, user_id, letter_id).await?;
    } else {
        ledger::sign(&mut tx, user_id, letter_id).await?;
    }

    let signature_count = ledger::count_for(&mut tx, letter_id).await?;

    tx.commit().await?;

    Ok(ToggleOutcome {
        signed: !was_signed,
        signature_count,
    })
}
