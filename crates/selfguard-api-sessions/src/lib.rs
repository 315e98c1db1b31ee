//! Session and device self-service API for selfguard.
//!
//! This crate lets an authenticated user view and revoke their own
//! login sessions and registered devices. Every destructive operation
//! is gated behind password re-verification:
//! - End one session (POST /sessions/:id/end)
//! - End all other sessions (POST /sessions/end-others)
//! - Sign out one device (POST /devices/:id/sign-out)
//! - Sign out all other devices (POST /devices/sign-out-others)
//!
//! The host application mounts the routers and supplies a
//! [`RequestContext`] extension from its auth middleware; the current
//! session and device are identified explicitly there, never inferred.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::Router;
//! use selfguard_api_sessions::{devices_router, sessions_router, SessionsState};
//!
//! let state = SessionsState::new(pool);
//! let app = Router::new()
//!     .nest("/sessions", sessions_router(&state))
//!     .nest("/devices", devices_router(&state));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod flow;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use config::{SelfguardSettings, DEFAULT_DEVICE_ROUTE};
pub use context::RequestContext;
pub use error::{ApiSessionsError, ErrorResponse};
pub use flow::{ConfirmationFlow, FlowState, RevocationTarget};
pub use models::{
    ConfirmPasswordRequest, DeviceListResponse, DeviceResponse, RevocationEvent,
    RevocationResponse, SessionListResponse, SessionResponse,
};
pub use router::{devices_router, sessions_router, SessionsState};
pub use services::{CredentialReverifier, RevocationService};
