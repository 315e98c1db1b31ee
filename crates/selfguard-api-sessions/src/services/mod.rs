//! Services.

mod reverifier;
mod revocation_service;

pub use reverifier::CredentialReverifier;
pub use revocation_service::RevocationService;
