//! Settings for the session self-service surface.

use serde::Deserialize;

/// Default route for the device management settings page.
pub const DEFAULT_DEVICE_ROUTE: &str = "/settings/devices";

/// Environment variable overriding the device settings route.
const DEVICE_ROUTE_ENV: &str = "SELFGUARD_DEVICE_ROUTE";

/// Runtime settings.
///
/// The device route is the path where the host application serves its
/// sessions/devices settings page; it is exposed here so navigation and
/// redirects can reference a single constant.
#[derive(Debug, Clone, Deserialize)]
pub struct SelfguardSettings {
    /// Route URI for the device management page.
    #[serde(default = "default_device_route")]
    pub device_route: String,
}

fn default_device_route() -> String {
    DEFAULT_DEVICE_ROUTE.to_string()
}

impl Default for SelfguardSettings {
    fn default() -> Self {
        Self {
            device_route: default_device_route(),
        }
    }
}

impl SelfguardSettings {
    /// Load settings from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            device_route: std::env::var(DEVICE_ROUTE_ENV)
                .unwrap_or_else(|_| default_device_route()),
        }
    }
}
