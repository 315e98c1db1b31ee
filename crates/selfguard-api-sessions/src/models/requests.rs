//! Request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Password confirmation carried by every destructive request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ConfirmPasswordRequest {
    /// The caller's current password.
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}
