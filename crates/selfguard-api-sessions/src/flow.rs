//! Confirmation flow state machine.
//!
//! Every destructive operation runs through the same two-step flow the
//! settings UI presents: pick a target, then confirm with a password.
//! [`ConfirmationFlow`] models that flow for stateful callers (an
//! embedded UI component, a CLI prompt): `Idle -> Confirming(target)`,
//! resolved by either committing or cancelling. The HTTP handlers are
//! stateless and carry target and password in one request, which is the
//! degenerate `confirm` + `commit` in a single step.
//!
//! A failed password check keeps the flow in `Confirming` with the
//! field error recorded, so the caller can re-prompt without losing the
//! target.

use crate::error::ApiSessionsError;
use selfguard_core::{DeviceId, SessionId};

/// What a confirmation flow is about to revoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevocationTarget {
    /// End one specific session.
    Session(SessionId),
    /// End every session except the current one.
    AllOtherSessions,
    /// Sign out one specific device.
    Device(DeviceId),
    /// Sign out every device except the current one.
    AllOtherDevices,
}

/// Flow state: either nothing pending, or one target awaiting a
/// password confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// No confirmation in progress.
    #[default]
    Idle,
    /// Waiting for the password confirming this target.
    Confirming(RevocationTarget),
}

/// A per-caller confirmation flow.
///
/// Holds no credentials beyond the transient password field and has no
/// side effects of its own; committing is done by handing the target to
/// the revocation service.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationFlow {
    state: FlowState,
    password: String,
    error: Option<String>,
}

impl ConfirmationFlow {
    /// Create a flow in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Whether a confirmation is pending.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        matches!(self.state, FlowState::Confirming(_))
    }

    /// Last recorded field error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient password field.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set the password field (bound to the confirmation input).
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Start confirming a target.
    ///
    /// Clears any previous error and password, replacing whatever was
    /// pending before.
    pub fn confirm(&mut self, target: RevocationTarget) {
        self.error = None;
        self.password.clear();
        self.state = FlowState::Confirming(target);
    }

    /// Take the pending target to commit it.
    ///
    /// # Errors
    ///
    /// Returns a validation error when nothing is pending; committing
    /// from `Idle` is a caller bug surfaced as a recoverable error.
    pub fn committing(&self) -> Result<RevocationTarget, ApiSessionsError> {
        match self.state {
            FlowState::Confirming(target) => Ok(target),
            FlowState::Idle => Err(ApiSessionsError::validation(
                "No revocation is awaiting confirmation.",
            )),
        }
    }

    /// Record a failed password check, staying in `Confirming`.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.password.clear();
    }

    /// Mark the pending operation committed and return to idle.
    pub fn complete(&mut self) {
        self.state = FlowState::Idle;
        self.password.clear();
        self.error = None;
    }

    /// Discard the pending target and password. No side effects.
    pub fn cancel(&mut self) {
        self.state = FlowState::Idle;
        self.password.clear();
        self.error = None;
    }
}
