//! Completion events for revocation operations.

use serde::Serialize;
use std::fmt;

/// Typed result of a committed revocation.
///
/// Returned from each operation instead of being broadcast; the HTTP
/// layer serializes the event name for UI notifications, and embedded
/// callers can match on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RevocationEvent {
    /// One session was ended (or was already gone; the outcome is the
    /// same terminal state either way).
    SessionEnded,
    /// Every other session was ended.
    AllSessionsEnded {
        /// Number of sessions that actually transitioned.
        ended: u64,
    },
    /// One device's sessions were ended.
    DeviceSignedOut {
        /// Number of sessions that actually transitioned.
        ended: u64,
    },
    /// Every other device's sessions were ended.
    AllDevicesSignedOut {
        /// Number of sessions that actually transitioned.
        ended: u64,
    },
}

impl RevocationEvent {
    /// Kebab-case event name, as dispatched to the UI.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RevocationEvent::SessionEnded => "session-ended",
            RevocationEvent::AllSessionsEnded { .. } => "all-sessions-ended",
            RevocationEvent::DeviceSignedOut { .. } => "device-signed-out",
            RevocationEvent::AllDevicesSignedOut { .. } => "all-devices-signed-out",
        }
    }

    /// Number of sessions the operation ended.
    #[must_use]
    pub fn ended(&self) -> u64 {
        match self {
            RevocationEvent::SessionEnded => 1,
            RevocationEvent::AllSessionsEnded { ended }
            | RevocationEvent::DeviceSignedOut { ended }
            | RevocationEvent::AllDevicesSignedOut { ended } => *ended,
        }
    }
}

impl fmt::Display for RevocationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(RevocationEvent::SessionEnded.name(), "session-ended");
        assert_eq!(
            RevocationEvent::AllSessionsEnded { ended: 3 }.name(),
            "all-sessions-ended"
        );
        assert_eq!(
            RevocationEvent::DeviceSignedOut { ended: 1 }.name(),
            "device-signed-out"
        );
        assert_eq!(
            RevocationEvent::AllDevicesSignedOut { ended: 2 }.name(),
            "all-devices-signed-out"
        );
    }

    #[test]
    fn test_event_serializes_tagged_kebab_case() {
        let json =
            serde_json::to_string(&RevocationEvent::AllSessionsEnded { ended: 2 }).unwrap();
        assert_eq!(json, r#"{"event":"all-sessions-ended","ended":2}"#);
    }

    #[test]
    fn test_ended_counts() {
        assert_eq!(RevocationEvent::SessionEnded.ended(), 1);
        assert_eq!(RevocationEvent::AllDevicesSignedOut { ended: 5 }.ended(), 5);
    }
}
