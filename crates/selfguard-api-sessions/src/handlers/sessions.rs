//! Session self-service handlers.

use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    context::RequestContext,
    error::ApiSessionsError,
    handlers::validate_confirmation,
    models::{ConfirmPasswordRequest, RevocationResponse, SessionListResponse},
    services::RevocationService,
};
use selfguard_core::SessionId;

/// GET /sessions
///
/// List the caller's active sessions, newest activity first.
pub async fn list_sessions(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<(StatusCode, Json<SessionListResponse>), ApiSessionsError> {
    let sessions = service.list_sessions(&ctx).await?;
    let total = sessions.len();

    Ok((StatusCode::OK, Json(SessionListResponse { sessions, total })))
}

/// POST /sessions/:id/end
///
/// End a specific session after password confirmation. Ending a session
/// that is already gone (another tab won the race) still succeeds.
pub async fn end_session(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ConfirmPasswordRequest>,
) -> Result<(StatusCode, Json<RevocationResponse>), ApiSessionsError> {
    validate_confirmation(&request)?;

    let event = service
        .end_session(&ctx, SessionId::from_uuid(session_id), &request.password)
        .await?;

    Ok((StatusCode::OK, Json(RevocationResponse::new(event))))
}

/// POST /sessions/end-others
///
/// End all of the caller's sessions except the current one.
#[utoipa::path(
    post,
    path = "/sessions/end-others",
    request_body = ConfirmPasswordRequest,
    responses(
        (status = 200, description = "All other sessions ended", body = RevocationResponse),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Password does not match"),
    ),
    tag = "Sessions"
)]
pub async fn end_all_other_sessions(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
    Json(request): Json<ConfirmPasswordRequest>,
) -> Result<(StatusCode, Json<RevocationResponse>), ApiSessionsError> {
    validate_confirmation(&request)?;

    let event = service.end_all_other_sessions(&ctx, &request.password).await?;

    Ok((StatusCode::OK, Json(RevocationResponse::new(event))))
}
