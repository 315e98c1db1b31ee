//! Router configuration for the self-service endpoints.
//!
//! Routes:
//! - GET  /sessions
//! - POST /sessions/:id/end
//! - POST /sessions/end-others
//! - GET  /devices
//! - POST /devices/:id/sign-out
//! - POST /devices/sign-out-others
//!
//! The host application nests these routers behind its auth middleware,
//! which must insert a [`RequestContext`](crate::RequestContext)
//! extension identifying the caller and their current session/device.

use crate::handlers::{
    end_all_other_sessions, end_session, list_devices, list_sessions,
    sign_out_all_other_devices, sign_out_device,
};
use crate::services::RevocationService;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the self-service routers.
#[derive(Clone)]
pub struct SessionsState {
    /// Database connection pool.
    pub pool: PgPool,
    /// The revocation service behind every endpoint.
    pub revocation_service: Arc<RevocationService>,
}

impl SessionsState {
    /// Build the state from a connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let revocation_service = Arc::new(RevocationService::new(pool.clone()));
        Self {
            pool,
            revocation_service,
        }
    }
}

/// Router for session listing and revocation.
pub fn sessions_router(state: &SessionsState) -> Router {
    Router::new()
        .route("/", get(list_sessions))
        .route("/:id/end", post(end_session))
        .route("/end-others", post(end_all_other_sessions))
        .layer(Extension(state.revocation_service.clone()))
}

/// Router for device listing and sign-out.
pub fn devices_router(state: &SessionsState) -> Router {
    Router::new()
        .route("/", get(list_devices))
        .route("/:id/sign-out", post(sign_out_device))
        .route("/sign-out-others", post(sign_out_all_other_devices))
        .layer(Extension(state.revocation_service.clone()))
}
