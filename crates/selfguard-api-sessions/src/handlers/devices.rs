//! Device self-service handlers.

use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    context::RequestContext,
    error::ApiSessionsError,
    handlers::validate_confirmation,
    models::{ConfirmPasswordRequest, DeviceListResponse, RevocationResponse},
    services::RevocationService,
};
use selfguard_core::DeviceId;

/// GET /devices
///
/// List the caller's devices with their active sessions, the current
/// device first.
pub async fn list_devices(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<(StatusCode, Json<DeviceListResponse>), ApiSessionsError> {
    let devices = service.list_devices(&ctx).await?;
    let total = devices.len();

    Ok((StatusCode::OK, Json(DeviceListResponse { devices, total })))
}

/// POST /devices/:id/sign-out
///
/// End the caller's active sessions on one device after password
/// confirmation.
pub async fn sign_out_device(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
    Path(device_id): Path<Uuid>,
    Json(request): Json<ConfirmPasswordRequest>,
) -> Result<(StatusCode, Json<RevocationResponse>), ApiSessionsError> {
    validate_confirmation(&request)?;

    let event = service
        .sign_out_device(&ctx, DeviceId::from_uuid(device_id), &request.password)
        .await?;

    Ok((StatusCode::OK, Json(RevocationResponse::new(event))))
}

/// POST /devices/sign-out-others
///
/// Sign out every device except the one carrying this request.
#[utoipa::path(
    post,
    path = "/devices/sign-out-others",
    request_body = ConfirmPasswordRequest,
    responses(
        (status = 200, description = "All other devices signed out", body = RevocationResponse),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Password does not match"),
    ),
    tag = "Devices"
)]
pub async fn sign_out_all_other_devices(
    Extension(service): Extension<Arc<RevocationService>>,
    Extension(ctx): Extension<RequestContext>,
    Json(request): Json<ConfirmPasswordRequest>,
) -> Result<(StatusCode, Json<RevocationResponse>), ApiSessionsError> {
    validate_confirmation(&request)?;

    let event = service
        .sign_out_all_other_devices(&ctx, &request.password)
        .await?;

    Ok((StatusCode::OK, Json(RevocationResponse::new(event))))
}
