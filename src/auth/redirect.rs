//! Turns gate decisions into router instructions.
//!
//! The gate may be re-evaluated several times before a redirect it asked for
//! has landed (the location signal updates after navigation completes).
//! `RedirectTracker` remembers the one outstanding target so those repeat
//! evaluations do not stack further instructions on top of it.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos_router::NavigateOptions;

use super::gate::{RedirectDecision, decide};
use crate::routes::Location;
use crate::state::session::SessionState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectTracker {
    pending: Option<&'static str>,
}

impl RedirectTracker {
    /// Target of the redirect issued but not yet observed at the location.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<&'static str> {
        self.pending
    }

    /// Feed one gate evaluation. Returns the target to navigate to (with
    /// history replacement), or `None` if nothing new must be issued.
    pub fn next(&mut self, decision: RedirectDecision, location: &Location) -> Option<&'static str> {
        if self.pending.is_some_and(|target| location.is_at(target)) {
            self.pending = None;
        }

        match decision {
            RedirectDecision::NoAction => {
                self.pending = None;
                None
            }
            RedirectDecision::Replace { target } if self.pending == Some(target) => None,
            RedirectDecision::Replace { target } => {
                self.pending = Some(target);
                Some(target)
            }
        }
    }
}

/// One gate evaluation as the router applies it.
///
/// Returns the target and navigation options when a new redirect must be
/// issued. Redirects always replace the current history entry.
pub fn gate_step(
    tracker: &mut RedirectTracker,
    state: &SessionState,
    location: &Location,
) -> Option<(&'static str, NavigateOptions)> {
    let target = tracker.next(decide(state, location), location)?;
    Some((target, NavigateOptions { replace: true, ..NavigateOptions::default() }))
}
