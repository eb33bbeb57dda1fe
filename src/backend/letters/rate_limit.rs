/**
 * Letter Creation Rate Limiter
 *
 * This module enforces the minimum interval between a user's successive
 * letter creations, backed by the `last_letter_sent_at` column.
 *
 * # Locking Discipline
 *
 * `check_and_reserve` reads the timestamp with `SELECT ... FOR UPDATE`,
 * taking a row-level exclusive lock that lives until the enclosing
 * transaction commits or rolls back. Two concurrent creation attempts by
 * the same user therefore serialize: the second blocks on the lock and,
 * once it acquires it, observes the first attempt's committed timestamp.
 *
 * After an `Allowed` decision the caller must call `record_send` within
 * the same transaction, so the letter and the timestamp that gates the
 * next one commit or roll back together.
 */

use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Cooldown window between letters from the same user
pub const COOLDOWN_SECONDS: i64 = 60;

/// Outcome of a rate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// The caller may insert a letter and must record the send time
    Allowed,
    /// The cooldown has not elapsed
    Denied {
        /// Whole seconds until the next creation is allowed, in (0, 60]
        retry_after_seconds: i64,
    },
}

/// Seconds left in the cooldown window, rounded up; None once it elapsed
///
/// Pure so the arithmetic is testable without a database. The result is
/// clamped to the window size, keeping the advertised wait in (0, 60]
/// even if the stored timestamp is somehow ahead of the clock.
pub fn remaining_cooldown(last_sent: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<i64> {
    let last = last_sent?;
    let window_ms = COOLDOWN_SECONDS * 1000;
    let elapsed_ms = (now - last).num_milliseconds();
    if elapsed_ms >= window_ms {
        return None;
    }
    let remaining_ms = window_ms - elapsed_ms;
    Some(((remaining_ms + 999) / 1000).min(COOLDOWN_SECONDS))
}

/// Check the cooldown under an exclusive row lock
///
/// The lock is scoped to the enclosing transaction and released on
/// commit or rollback.
///
/// # Errors
///
/// Propagates storage failures; `RowNotFound` if the user row is gone
/// (the extractor verified it existed, so that means a concurrent
/// deletion).
pub async fn check_and_reserve(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<RateDecision, sqlx::Error> {
    let last_sent = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
        "SELECT last_letter_sent_at FROM users WHERE id = $1 FOR UPDATE",
    )
    .bind(user_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(match remaining_cooldown(last_sent, now) {
        Some(retry_after_seconds) => RateDecision::Denied {
            retry_after_seconds,
        },
        None => RateDecision::Allowed,
    })
}

/// Record a successful send inside the same transaction
pub async fn record_send(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    sent_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_letter_sent_at = $2 WHERE id = $1")
        .bind(user_id)
        .bind(sent_at)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
