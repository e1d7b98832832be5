use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::VerificationToken;

pub async fn create(
    pool: &PgPool,
    token: &str,
    identifier: &str,
    expires_at: DateTime<Utc>,
) -> Result<VerificationToken, sqlx::Error> {
    sqlx::query_as::<_, VerificationToken>(
        "INSERT INTO verification_tokens (token, identifier, expires_at)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(token)
    .bind(identifier)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

/// Atomically claim a token: delete the row and return it, whether or not it
/// has expired. Under concurrent redemption of the same token only one caller
/// gets the row back; the rest see `None`. The caller is responsible for
/// checking `expires_at` on the returned row.
pub async fn consume(
    pool: &PgPool,
    token: &str,
) -> Result<Option<VerificationToken>, sqlx::Error> {
    sqlx::query_as::<_, VerificationToken>(
        "DELETE FROM verification_tokens WHERE token = $1 RETURNING *",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}
