//! Caller context for self-service operations.

use selfguard_core::{DeviceId, SessionId, UserId};

/// Identity of the in-flight request.
///
/// Built by the host's auth middleware and injected as an axum
/// `Extension`. The current session and device are named explicitly so
/// the revocation service never has to consult ambient request state to
/// decide what "current" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated principal. All queries are scoped to this id.
    pub user_id: UserId,

    /// The session carrying this request. Bulk operations never end it.
    pub session_id: SessionId,

    /// The device carrying this request, when fingerprinting resolved
    /// one. Bulk device sign-out skips it.
    pub device_id: Option<DeviceId>,
}

impl RequestContext {
    /// Create a context for a request with a known current device.
    #[must_use]
    pub fn new(user_id: UserId, session_id: SessionId, device_id: Option<DeviceId>) -> Self {
        Self {
            user_id,
            session_id,
            device_id,
        }
    }

    /// Whether the given session id is the one carrying this request.
    #[must_use]
    pub fn is_current_session(&self, session_id: SessionId) -> bool {
        self.session_id == session_id
    }

    /// Whether the given device id is the one carrying this request.
    #[must_use]
    pub fn is_current_device(&self, device_id: DeviceId) -> bool {
        self.device_id == Some(device_id)
    }
}
