//! Core types for selfguard.
//!
//! This crate provides the strongly typed identifiers and capability
//! traits shared by the selfguard crates. It has no database or HTTP
//! dependencies and can be used by any principal type that wants to
//! participate in session/device self-service.

pub mod ids;
pub mod traits;

pub use ids::{DeviceId, ParseIdError, SessionId, UserId};
pub use traits::{HasDevices, HasSessions};
