//! Session resolver: the single identity check performed per launch.
//!
//! The check is issued at most once per process, no matter how many times
//! the root component is constructed (hot reload re-runs construction).
//! Whatever happens to the request, the outcome is terminal for the launch:
//! no retry, no polling, and every failure collapses to `Unauthenticated`.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use futures::channel::oneshot;

use crate::net::api::{IdentityError, IdentitySource};
use crate::net::types::IdentityResponse;
use crate::state::session::SessionState;

/// Completion flag guarding the launch-time identity check.
///
/// Also keeps the settled outcome, and the roots waiting for it, so a root
/// constructed while the check is in flight or after it finished settles
/// too without asking again.
#[derive(Debug, Default)]
pub struct LaunchFlag {
    claimed: AtomicBool,
    settled: OnceLock<SessionState>,
    waiters: Mutex<Vec<oneshot::Sender<SessionState>>>,
}

impl LaunchFlag {
    pub const fn new() -> Self {
        Self { claimed: AtomicBool::new(false), settled: OnceLock::new(), waiters: Mutex::new(Vec::new()) }
    }

    /// Claim the right to run the check. Only the first caller gets `true`.
    pub fn try_claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    /// Outcome of the check, once it has settled.
    pub fn settled(&self) -> Option<&SessionState> {
        self.settled.get()
    }

    /// Record the outcome and hand it to every waiting root.
    pub(crate) fn publish(&self, outcome: SessionState) {
        let mut waiters = self.waiters.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = self.settled.set(outcome);
        let Some(outcome) = self.settled.get() else { return };
        for tx in waiters.drain(..) {
            let _ = tx.send(outcome.clone());
        }
    }

    /// Wait for the outcome of a check claimed by someone else.
    ///
    /// Yields `None` only if the claimer went away without publishing.
    async fn wait_settled(&self) -> Option<SessionState> {
        let rx = {
            let mut waiters = self.waiters.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(outcome) = self.settled.get() {
                return Some(outcome.clone());
            }
            let (tx, rx) = oneshot::channel();
            waiters.push(tx);
            rx
        };
        rx.await.ok()
    }
}

/// Process-wide flag used by the application root.
pub static LAUNCH: LaunchFlag = LaunchFlag::new();

pub struct SessionResolver<'a, S> {
    source: S,
    flag: &'a LaunchFlag,
}

impl<'a, S: IdentitySource> SessionResolver<'a, S> {
    pub fn new(source: S, flag: &'a LaunchFlag) -> Self {
        Self { source, flag }
    }

    /// Run the identity check if this launch has not run it yet.
    ///
    /// Returns the terminal session state. When an earlier construction
    /// already claimed the check, no request is made: the caller waits for
    /// that check's outcome instead.
    pub async fn resolve(&self) -> Option<SessionState> {
        if !self.flag.try_claim() {
            leptos::logging::log!("session: identity check already issued this launch; waiting for it");
            return self.flag.wait_settled().await;
        }

        leptos::logging::log!("session: checking identity");
        let outcome = outcome_of(self.source.fetch_identity().await);
        leptos::logging::log!("session: resolved authenticated={}", outcome.is_authenticated());
        self.flag.publish(outcome.clone());
        Some(outcome)
    }
}

/// Map the identity check result to a terminal session state.
///
/// Only a positive flag carrying an identity authenticates. Failures are
/// logged with their class and absorbed here.
pub fn outcome_of(result: Result<IdentityResponse, IdentityError>) -> SessionState {
    match result {
        Ok(resp) => match resp.into_identity() {
            Some(identity) => SessionState::Authenticated(identity),
            None => SessionState::Unauthenticated,
        },
        Err(e) => {
            leptos::logging::warn!("session: {e}; treating as signed out");
            SessionState::Unauthenticated
        }
    }
}
