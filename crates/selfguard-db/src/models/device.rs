//! Device model and the device store gateway.
//!
//! A device is a registered client fingerprint grouping zero or more
//! sessions. Devices are created by the tracking side at first sight of
//! a new fingerprint; this layer only lists them and resolves them for
//! per-device sign-out.

use crate::models::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

/// Device class derived from the client fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Desktop computer (Windows, macOS, Linux).
    Desktop,
    /// Tablet device (iPad, Android tablet).
    Tablet,
    /// Mobile phone (iOS, Android).
    Phone,
    /// Could not be classified.
    Unknown,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::Desktop => write!(f, "desktop"),
            DeviceType::Tablet => write!(f, "tablet"),
            DeviceType::Phone => write!(f, "phone"),
            DeviceType::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(DeviceType::Desktop),
            "tablet" => Ok(DeviceType::Tablet),
            // Trackers report phones under either label
            "phone" | "mobile" => Ok(DeviceType::Phone),
            "unknown" => Ok(DeviceType::Unknown),
            _ => Err(format!("Unknown device type: {s}")),
        }
    }
}

/// A registered client device.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Device {
    /// Unique identifier.
    pub id: Uuid,

    /// The user who owns this device.
    pub user_id: Uuid,

    /// Device class.
    pub device_type: DeviceType,

    /// Operating system / platform name.
    pub platform: Option<String>,

    /// Browser name.
    pub browser: Option<String>,

    /// When the device was first registered.
    pub created_at: DateTime<Utc>,
}

/// A device together with its owner's active sessions on it.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceWithSessions {
    /// The device record.
    #[serde(flatten)]
    pub device: Device,

    /// Active sessions opened from this device, newest activity first.
    pub sessions: Vec<Session>,
}

impl Device {
    /// Find all devices registered to a user.
    pub async fn find_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r#"
            SELECT * FROM devices
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Find one device owned by the given user.
    ///
    /// Returns `None` for absent or other-user devices alike.
    pub async fn find_for_user<'e, E>(
        executor: E,
        user_id: Uuid,
        device_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as("SELECT * FROM devices WHERE id = $1 AND user_id = $2")
            .bind(device_id)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }
}

/// Group a user's active sessions under their devices.
///
/// Sessions are assumed to be ordered newest activity first (the order
/// [`Session::find_active_by_user`] returns) and keep that order within
/// each device. Sessions without a device are dropped from the grouping;
/// they still appear in the flat session listing.
#[must_use]
pub fn attach_active_sessions(
    devices: Vec<Device>,
    sessions: Vec<Session>,
) -> Vec<DeviceWithSessions> {
    devices
        .into_iter()
        .map(|device| {
            let sessions = sessions
                .iter()
                .filter(|s| s.device_id == Some(device.id))
                .cloned()
                .collect();
            DeviceWithSessions { device, sessions }
        })
        .collect()
}
