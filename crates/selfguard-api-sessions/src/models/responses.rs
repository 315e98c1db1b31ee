//! Response models.

use crate::models::events::RevocationEvent;
use chrono::{DateTime, Utc};
use selfguard_db::{DeviceType, DeviceWithSessions, Session, SessionStatus};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One session in a listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Session ID.
    pub id: Uuid,
    /// Device this session was opened from, if known.
    pub device_id: Option<Uuid>,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// Geolocated city, if resolved.
    pub geo_city: Option<String>,
    /// Geolocated country, if resolved.
    pub geo_country: Option<String>,
    /// Session status.
    #[schema(value_type = String)]
    pub status: SessionStatus,
    /// Whether this is the session carrying the request.
    pub is_current: bool,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            device_id: session.device_id,
            ip_address: session.ip_address,
            geo_city: session.geo_city,
            geo_country: session.geo_country,
            status: session.status,
            is_current: false, // Set by caller
            created_at: session.created_at,
            last_activity_at: session.last_activity_at,
        }
    }
}

/// Response for listing user sessions.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionListResponse {
    /// Active sessions, newest activity first.
    pub sessions: Vec<SessionResponse>,
    /// Total number of active sessions.
    pub total: usize,
}

/// One device in a listing, with its active sessions preloaded.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeviceResponse {
    /// Device ID.
    pub id: Uuid,
    /// Device class (desktop, tablet, phone, unknown).
    #[schema(value_type = String)]
    pub device_type: DeviceType,
    /// Operating system / platform name.
    pub platform: Option<String>,
    /// Browser name.
    pub browser: Option<String>,
    /// Whether this is the device carrying the request.
    pub is_current: bool,
    /// When the device was first registered.
    pub created_at: DateTime<Utc>,
    /// The caller's active sessions on this device.
    pub sessions: Vec<SessionResponse>,
}

impl From<DeviceWithSessions> for DeviceResponse {
    fn from(entry: DeviceWithSessions) -> Self {
        Self {
            id: entry.device.id,
            device_type: entry.device.device_type,
            platform: entry.device.platform,
            browser: entry.device.browser,
            is_current: false, // Set by caller
            created_at: entry.device.created_at,
            sessions: entry.sessions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for listing user devices.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeviceListResponse {
    /// Devices, current device first.
    pub devices: Vec<DeviceResponse>,
    /// Total number of devices.
    pub total: usize,
}

/// Response for a committed revocation.
#[derive(Debug, Serialize, ToSchema)]
pub struct RevocationResponse {
    /// The completion event, tagged with its UI name.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub event: RevocationEvent,
    /// Confirmation message.
    pub message: String,
}

impl RevocationResponse {
    #[must_use]
    pub fn new(event: RevocationEvent) -> Self {
        let message = match event {
            RevocationEvent::SessionEnded => "Session ended".to_string(),
            RevocationEvent::AllSessionsEnded { ended } => {
                format!("{ended} session(s) ended")
            }
            RevocationEvent::DeviceSignedOut { ended } => {
                format!("Device signed out, {ended} session(s) ended")
            }
            RevocationEvent::AllDevicesSignedOut { ended } => {
                format!("Other devices signed out, {ended} session(s) ended")
            }
        };
        Self { event, message }
    }
}
