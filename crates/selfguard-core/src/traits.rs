//! Principal capability traits.
//!
//! A principal type participates in session self-service by implementing
//! [`HasSessions`], and in device self-service by implementing
//! [`HasDevices`]. Absence of a capability is a compile-time error, not
//! a runtime check.
//!
//! # Example
//!
//! ```
//! use selfguard_core::{HasDevices, HasSessions, UserId};
//!
//! struct Account {
//!     id: UserId,
//!     email: String,
//! }
//!
//! impl HasSessions for Account {
//!     fn principal_id(&self) -> UserId {
//!         self.id
//!     }
//! }
//!
//! impl HasDevices for Account {}
//!
//! let account = Account {
//!     id: UserId::new(),
//!     email: "user@example.com".to_string(),
//! };
//! assert_eq!(account.principal_id(), account.id);
//! ```

use crate::ids::UserId;

/// Capability: the principal owns login sessions that can be listed and
/// ended on its behalf.
///
/// This trait is object-safe and can be used as `&dyn HasSessions`.
pub trait HasSessions {
    /// The identifier all session queries are scoped to.
    fn principal_id(&self) -> UserId;
}

/// Capability: the principal owns registered devices, each grouping zero
/// or more of its sessions.
///
/// Device operations reuse the session scoping from [`HasSessions`];
/// a principal cannot have devices without having sessions.
pub trait HasDevices: HasSessions {}
