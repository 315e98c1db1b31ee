//! Credential re-verification.
//!
//! Destructive operations require the caller to re-enter their
//! password. The reverifier compares the supplied plaintext against the
//! stored Argon2id hash and has no side effects on failure.

use crate::error::ApiSessionsError;
use selfguard_auth::verify_password;
use selfguard_core::UserId;
use selfguard_db::User;
use sqlx::PgPool;

/// Re-checks the caller's password before a destructive action.
#[derive(Clone)]
pub struct CredentialReverifier {
    pool: PgPool,
}

impl CredentialReverifier {
    /// Create a new reverifier.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verify the supplied password for the given principal.
    ///
    /// # Errors
    ///
    /// - field-level validation error for a blank password;
    /// - `InvalidCredentials` on mismatch — the caller must not proceed;
    /// - `Unauthorized` if the principal no longer exists.
    pub async fn verify(&self, user_id: UserId, password: &str) -> Result<(), ApiSessionsError> {
        if password.is_empty() {
            return Err(ApiSessionsError::validation_field(
                "The password field is required.",
                "password",
            ));
        }

        let user = User::find_by_id(&self.pool, *user_id.as_uuid())
            .await?
            .ok_or_else(|| ApiSessionsError::Unauthorized("Unknown principal".to_string()))?;

        let valid = verify_password(password, &user.password_hash)?;
        if !valid {
            tracing::debug!(user_id = %user_id, "Password reverification failed");
            return Err(ApiSessionsError::InvalidCredentials);
        }

        Ok(())
    }
}
