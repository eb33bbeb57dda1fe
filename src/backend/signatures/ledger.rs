//! Signature ledger operations
//!
//! One row per (user, letter) endorsement. The composite primary key
//! enforces at-most-one signature per pair; when two transactions race
//! the same insert, the constraint rejects the loser.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Whether the user currently signs the letter
pub async fn is_signed(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    letter_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM signatures WHERE user_id = $1 AND letter_id = $2)",
    )
    .bind(user_id)
    .bind(letter_id)
    .fetch_one(&mut **tx)
    .await
}

/// Record a signature
///
/// Fails with a unique violation if the pair already exists; the toggle
/// service pre-checks via `is_signed` in the same transaction so end
/// users see toggle semantics rather than an error.
pub async fn sign(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    letter_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO signatures (user_id, letter_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(letter_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Remove a signature; a no-op when the pair is absent
pub async fn unsign(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    letter_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM signatures WHERE user_id = $1 AND letter_id = $2")
        .bind(user_id)
        .bind(letter_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Live signature count for a letter
pub async fn count_for(
    tx: &mut Transaction<'_, Postgres>,
    letter_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM signatures WHERE letter_id = $1")
        .bind(letter_id)
        .fetch_one(&mut **tx)
        .await
}
