#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserIdentity;

/// Resolution progress of the launch-time identity check.
///
/// Starts as `Loading` and settles exactly once into one of the terminal
/// variants. Nothing short of a relaunch returns it to `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(UserIdentity),
    Unauthenticated,
}

impl SessionState {
    /// `true` while the identity check is outstanding; the host renders a
    /// neutral waiting screen for as long as this holds.
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Apply a terminal outcome.
    ///
    /// Only a `Loading` state accepts it, and only a terminal outcome is
    /// accepted. Returns whether the state changed.
    pub fn settle(&mut self, outcome: SessionState) -> bool {
        if !self.is_resolving() || outcome.is_resolving() {
            return false;
        }
        *self = outcome;
        true
    }
}
