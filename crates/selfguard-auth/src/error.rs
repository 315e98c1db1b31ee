//! Error types for password operations.

use thiserror::Error;

/// Password operation errors.
///
/// Note that a wrong password is not an error: verification returns
/// `Ok(false)` for a mismatch. These variants cover operational
/// failures only.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check if this error indicates a malformed stored hash.
    #[must_use]
    pub fn is_invalid_hash(&self) -> bool {
        matches!(self, AuthError::InvalidHashFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::HashingFailed("out of memory".to_string());
        assert_eq!(err.to_string(), "Password hashing failed: out of memory");

        let err = AuthError::InvalidHashFormat;
        assert_eq!(err.to_string(), "Invalid password hash format");
    }

    #[test]
    fn test_is_invalid_hash() {
        assert!(AuthError::InvalidHashFormat.is_invalid_hash());
        assert!(!AuthError::HashingFailed(String::new()).is_invalid_hash());
    }
}
