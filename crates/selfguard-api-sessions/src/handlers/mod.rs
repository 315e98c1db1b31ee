//! HTTP handlers.

mod devices;
mod sessions;

pub use devices::{list_devices, sign_out_all_other_devices, sign_out_device};
pub use sessions::{end_all_other_sessions, end_session, list_sessions};

use crate::error::ApiSessionsError;
use crate::models::ConfirmPasswordRequest;
use validator::Validate;

/// Validate a password confirmation body, mapping validator output to a
/// field-level error on `password`.
fn validate_confirmation(request: &ConfirmPasswordRequest) -> Result<(), ApiSessionsError> {
    request.validate().map_err(|e| {
        let message = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect::<Vec<_>>()
            .join(", ");
        ApiSessionsError::validation_field(message, "password")
    })
}
