//! Database models.

pub mod device;
pub mod session;
pub mod user;
