//! Route gate: where may the visitor stay, given the session and location?
//!
//! DESIGN
//! ======
//! `decide` is pure. It holds no memory between calls, so the reactive
//! layer may re-run it on every session or location change and get the same
//! answer for the same inputs. Applying the answer to the router is the job
//! of `auth::redirect` and `app::RouteGate`.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::routes::{HOME_PATH, Location, PUBLIC_GROUP};
use crate::state::session::SessionState;

/// The gate's output for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Leave the visitor where they are.
    NoAction,
    /// Navigate to `target`, replacing the current history entry so
    /// back-navigation cannot return to the gated-away screen.
    Replace { target: &'static str },
}

/// Observable behaviour of the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// The session is still resolving; every evaluation is deferred.
    Deferring,
    /// The session has settled; evaluations may redirect.
    Active,
}

impl GatePhase {
    pub fn of(state: &SessionState) -> Self {
        if state.is_resolving() { Self::Deferring } else { Self::Active }
    }
}

/// Decide whether `location` is acceptable for `state`.
///
/// Rules, first match wins:
/// 1. `Loading`: no action.
/// 2. `Authenticated` at the landing location: replace with home.
/// 3. `Authenticated` inside the public group: replace with home.
/// 4. Anything else: no action.
pub fn decide(state: &SessionState, location: &Location) -> RedirectDecision {
    match state {
        SessionState::Loading => RedirectDecision::NoAction,
        SessionState::Authenticated(_) if location.is_root() || location.in_group(PUBLIC_GROUP) => {
            RedirectDecision::Replace { target: HOME_PATH }
        }
        SessionState::Authenticated(_) | SessionState::Unauthenticated => RedirectDecision::NoAction,
    }
}
