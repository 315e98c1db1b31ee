//! Database layer for selfguard.
//!
//! Contains the sqlx models for users, sessions, and devices, and the
//! store gateway operations the revocation service is built on. All
//! model methods are generic over [`sqlx::PgExecutor`] so they run
//! equally against a pool, a connection, or a transaction.
//!
//! Sessions and devices are created by the login/tracking side of the
//! host application; this crate only reads them and applies the one-way
//! `finished_at` transition.

pub mod error;
pub mod migrations;
pub mod models;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::device::{attach_active_sessions, Device, DeviceType, DeviceWithSessions};
pub use models::session::{Session, SessionStatus};
pub use models::user::User;
