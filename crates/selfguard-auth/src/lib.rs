//! Password primitives for selfguard.
//!
//! Provides Argon2id password hashing and the constant-time verification
//! used to gate destructive session/device operations.

pub mod error;
pub mod password;

pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordHasher};
