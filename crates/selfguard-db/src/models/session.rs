//! Session model and the session store gateway.
//!
//! A session is one authenticated login instance tied to a device and
//! IP. Ending a session is a one-way transition: `finished_at` is set
//! once and the row is excluded from every active listing afterwards.
//! Rows are never deleted by this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

/// Session status as reported by the tracking side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Session is in normal use.
    Active,
    /// Session was ended and can no longer be used.
    Inactive,
    /// Session is temporarily locked by the tracking engine.
    Locked,
    /// Session was blocked for security reasons.
    Blocked,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Inactive => write!(f, "inactive"),
            SessionStatus::Locked => write!(f, "locked"),
            SessionStatus::Blocked => write!(f, "blocked"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(SessionStatus::Active),
            "inactive" => Ok(SessionStatus::Inactive),
            "locked" => Ok(SessionStatus::Locked),
            "blocked" => Ok(SessionStatus::Blocked),
            _ => Err(format!("Unknown session status: {s}")),
        }
    }
}

/// One authenticated login instance.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    /// Unique identifier.
    pub id: Uuid,

    /// The user this session belongs to.
    pub user_id: Uuid,

    /// The device this session was opened from, if known.
    pub device_id: Option<Uuid>,

    /// Client IP address.
    pub ip_address: Option<String>,

    /// Geolocated city, if resolved.
    pub geo_city: Option<String>,

    /// Geolocated country, if resolved.
    pub geo_country: Option<String>,

    /// Current status.
    pub status: SessionStatus,

    /// When the session was created.
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp.
    pub last_activity_at: DateTime<Utc>,

    /// When the session was ended (None while active).
    pub finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check if the session is still active (not ended).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.finished_at.is_none()
    }

    /// Find all active sessions for a user, newest activity first.
    pub async fn find_active_by_user<'e, E>(
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r#"
            SELECT * FROM sessions
            WHERE user_id = $1 AND finished_at IS NULL
            ORDER BY last_activity_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Find one active session owned by the given user.
    ///
    /// Returns `None` if the session is absent, already finished, or
    /// belongs to another user. The caller cannot distinguish those
    /// cases, which keeps ownership probing impossible.
    pub async fn find_active<'e, E>(
        executor: E,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r#"
            SELECT * FROM sessions
            WHERE id = $1 AND user_id = $2 AND finished_at IS NULL
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
    }

    /// Count active sessions for a user.
    pub async fn count_active_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sessions WHERE user_id = $1 AND finished_at IS NULL",
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?;
        Ok(result.0)
    }

    /// End a session.
    ///
    /// Idempotent: the update predicate requires `finished_at IS NULL`,
    /// so ending an already-finished session is a no-op. Returns whether
    /// a row actually transitioned.
    pub async fn end<'e, E>(executor: E, id: Uuid) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET finished_at = NOW(), status = 'inactive'
            WHERE id = $1 AND finished_at IS NULL
            "#,
        )
        .bind(id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// End all active sessions for a user except the specified one.
    ///
    /// The excluded session is the caller's current session; it must
    /// survive every bulk operation.
    pub async fn end_all_except<'e, E>(
        executor: E,
        user_id: Uuid,
        except_session_id: Uuid,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET finished_at = NOW(), status = 'inactive'
            WHERE user_id = $1 AND id != $2 AND finished_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(except_session_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// End all of one device's active sessions belonging to the given
    /// user, never touching the excluded session.
    ///
    /// Scoping to `user_id` keeps a shared device record from cascading
    /// into other users' sessions.
    pub async fn end_all_for_device<'e, E>(
        executor: E,
        user_id: Uuid,
        device_id: Uuid,
        except_session_id: Uuid,
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET finished_at = NOW(), status = 'inactive'
            WHERE user_id = $1 AND device_id = $2 AND id != $3 AND finished_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(device_id)
        .bind(except_session_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
