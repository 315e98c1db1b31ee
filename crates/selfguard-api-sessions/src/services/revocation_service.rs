//! Revocation service.
//!
//! Orchestrates credential reverification and the store gateways for
//! the four destructive operations, plus the two read-side listings.
//! Every operation is scoped to the calling user; a missing target is a
//! benign no-op because ending a session is idempotent.

use crate::context::RequestContext;
use crate::error::ApiSessionsError;
use crate::models::events::RevocationEvent;
use crate::models::responses::{DeviceResponse, SessionResponse};
use crate::services::reverifier::CredentialReverifier;
use selfguard_core::{DeviceId, SessionId};
use selfguard_db::{attach_active_sessions, Device, Session};
use sqlx::PgPool;
use tracing::info;

/// Session and device revocation service.
#[derive(Clone)]
pub struct RevocationService {
    pool: PgPool,
    reverifier: CredentialReverifier,
}

impl RevocationService {
    /// Create a new revocation service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let reverifier = CredentialReverifier::new(pool.clone());
        Self { pool, reverifier }
    }

    /// All active sessions for the caller, newest activity first, with
    /// the current session flagged.
    pub async fn list_sessions(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<SessionResponse>, ApiSessionsError> {
        let sessions = Session::find_active_by_user(&self.pool, *ctx.user_id.as_uuid()).await?;

        Ok(sessions
            .into_iter()
            .map(|s| {
                let is_current = ctx.is_current_session(SessionId::from_uuid(s.id));
                let mut response: SessionResponse = s.into();
                response.is_current = is_current;
                response
            })
            .collect())
    }

    /// All devices for the caller, each preloaded with its active
    /// sessions, the current device sorted first.
    pub async fn list_devices(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<DeviceResponse>, ApiSessionsError> {
        let user_id = *ctx.user_id.as_uuid();
        let devices = Device::find_by_user(&self.pool, user_id).await?;
        let sessions = Session::find_active_by_user(&self.pool, user_id).await?;

        let mut responses: Vec<DeviceResponse> = attach_active_sessions(devices, sessions)
            .into_iter()
            .map(|entry| {
                let is_current = ctx.is_current_device(DeviceId::from_uuid(entry.device.id));
                let mut response: DeviceResponse = entry.into();
                response.is_current = is_current;
                for session in &mut response.sessions {
                    session.is_current = ctx.is_current_session(SessionId::from_uuid(session.id));
                }
                response
            })
            .collect();

        // Stable sort keeps the store ordering within each group.
        responses.sort_by_key(|d| !d.is_current);

        Ok(responses)
    }

    /// End one session after password confirmation.
    ///
    /// A target that is absent, already finished, or owned by someone
    /// else is treated as already done: another tab may have ended it
    /// first, and the terminal state is the same.
    pub async fn end_session(
        &self,
        ctx: &RequestContext,
        session_id: SessionId,
        password: &str,
    ) -> Result<RevocationEvent, ApiSessionsError> {
        self.reverifier.verify(ctx.user_id, password).await?;

        let session =
            Session::find_active(&self.pool, *ctx.user_id.as_uuid(), *session_id.as_uuid())
                .await?;

        if let Some(session) = session {
            let ended = Session::end(&self.pool, session.id).await?;
            if ended {
                info!(
                    user_id = %ctx.user_id,
                    session_id = %session_id,
                    "Session ended by user"
                );
            }
        }

        Ok(RevocationEvent::SessionEnded)
    }

    /// End every session except the current one.
    ///
    /// The current session is never ended by this operation; that is a
    /// safety invariant, not an oversight.
    pub async fn end_all_other_sessions(
        &self,
        ctx: &RequestContext,
        password: &str,
    ) -> Result<RevocationEvent, ApiSessionsError> {
        self.reverifier.verify(ctx.user_id, password).await?;

        let ended = Session::end_all_except(
            &self.pool,
            *ctx.user_id.as_uuid(),
            *ctx.session_id.as_uuid(),
        )
        .await?;

        info!(
            user_id = %ctx.user_id,
            ended_count = ended,
            "Ended all sessions except current"
        );

        Ok(RevocationEvent::AllSessionsEnded { ended })
    }

    /// Sign out one device: end the caller's active sessions on it.
    ///
    /// Only the caller's sessions are touched; a shared device record
    /// never cascades into other users' sessions. The current session
    /// survives even when the caller targets their own current device.
    pub async fn sign_out_device(
        &self,
        ctx: &RequestContext,
        device_id: DeviceId,
        password: &str,
    ) -> Result<RevocationEvent, ApiSessionsError> {
        self.reverifier.verify(ctx.user_id, password).await?;

        let device =
            Device::find_for_user(&self.pool, *ctx.user_id.as_uuid(), *device_id.as_uuid())
                .await?;

        let ended = match device {
            Some(device) => {
                let ended = Session::end_all_for_device(
                    &self.pool,
                    *ctx.user_id.as_uuid(),
                    device.id,
                    *ctx.session_id.as_uuid(),
                )
                .await?;

                info!(
                    user_id = %ctx.user_id,
                    device_id = %device_id,
                    ended_count = ended,
                    "Device signed out by user"
                );

                ended
            }
            // Unknown or foreign device: nothing to end.
            None => 0,
        };

        Ok(RevocationEvent::DeviceSignedOut { ended })
    }

    /// Sign out every device except the current one.
    pub async fn sign_out_all_other_devices(
        &self,
        ctx: &RequestContext,
        password: &str,
    ) -> Result<RevocationEvent, ApiSessionsError> {
        self.reverifier.verify(ctx.user_id, password).await?;

        let devices = Device::find_by_user(&self.pool, *ctx.user_id.as_uuid()).await?;

        let mut ended = 0u64;
        for device in devices {
            if ctx.is_current_device(DeviceId::from_uuid(device.id)) {
                continue;
            }
            ended += Session::end_all_for_device(
                &self.pool,
                *ctx.user_id.as_uuid(),
                device.id,
                *ctx.session_id.as_uuid(),
            )
            .await?;
        }

        info!(
            user_id = %ctx.user_id,
            ended_count = ended,
            "Signed out all devices except current"
        );

        Ok(RevocationEvent::AllDevicesSignedOut { ended })
    }
}
