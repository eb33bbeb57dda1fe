//! Letter persistence and aggregate reads
//!
//! Signature counts are computed live in every query; there is no stored
//! counter to drift out of step with the ledger.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::backend::letters::query::{BindParam, CompiledSearch};

/// A letter as persisted
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Letter {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A letter joined with its sender email and live signature aggregate
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LetterWithSignatures {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_email: String,
    #[serde(rename = "senderEmail")]
    pub sender_email: String,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "signatureCount")]
    pub signature_count: i64,
    /// Whether the viewer has signed; false when the request is anonymous
    #[serde(rename = "isSigned")]
    pub is_signed: bool,
}

/// Insert a new letter inside the creation transaction
///
/// Generates the identifier and creation time server-side and returns the
/// persisted row. Rate limiting is the caller's concern.
pub async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    sender_id: Uuid,
    recipient_email: &str,
    subject: &str,
    body: &str,
) -> Result<Letter, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Letter>(
        r#"
        INSERT INTO letters (id, sender_id, recipient_email, subject, body, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, sender_id, recipient_email, subject, body, created_at
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(recipient_email)
    .bind(subject)
    .bind(body)
    .bind(now)
    .fetch_one(&mut **tx)
    .await
}

/// Fetch one letter with its aggregate
///
/// The `EXISTS` sub-select is bound against the nullable viewer id, so an
/// anonymous request reports `is_signed = false` rather than erroring.
pub async fn get_by_id(
    pool: &PgPool,
    letter_id: Uuid,
    viewer: Option<Uuid>,
) -> Result<Option<LetterWithSignatures>, sqlx::Error> {
    sqlx::query_as::<_, LetterWithSignatures>(
        r#"
        SELECT
            l.id, l.sender_id, l.recipient_email, l.subject, l.body, l.created_at,
            u.email AS sender_email,
            COUNT(s.letter_id) AS signature_count,
            EXISTS (
                SELECT 1 FROM signatures
                WHERE letter_id = l.id AND user_id = $2
            ) AS is_signed
        FROM letters l
        LEFT JOIN signatures s ON l.id = s.letter_id
        LEFT JOIN users u ON l.sender_id = u.id
        WHERE l.id = $1
        GROUP BY l.id, u.id
        "#,
    )
    .bind(letter_id)
    .bind(viewer)
    .fetch_optional(pool)
    .await
}

/// Execute a compiled search
///
/// No match is an empty vec, never an error.
pub async fn search(
    pool: &PgPool,
    compiled: &CompiledSearch,
) -> Result<Vec<LetterWithSignatures>, sqlx::Error> {
    let mut query = sqlx::query_as::<_, LetterWithSignatures>(&compiled.sql);
    for param in &compiled.params {
        query = match param {
            BindParam::Text(value) => query.bind(value.as_str()),
            BindParam::Date(value) => query.bind(*value),
        };
    }
    query.fetch_all(pool).await
}
