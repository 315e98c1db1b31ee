//! User model.
//!
//! The principal record. Only the fields the revocation layer needs are
//! mapped: identity and the stored password hash used for
//! re-authentication before destructive actions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// An authenticated principal owning sessions and devices.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,

    /// Login email.
    pub email: String,

    /// PHC-formatted Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Find a user by ID.
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
