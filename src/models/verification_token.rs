use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single-use password reset token. `identifier` is the email of the account
/// the token was issued for; the row is deleted when the token is consumed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct VerificationToken {
    pub token: String,
    pub identifier: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
