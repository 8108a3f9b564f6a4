//! Route guard for the protected dashboard surface.
//!
//! The guard consumes the session stream and decides, exactly once,
//! whether the protected view may render. It holds `Pending` until the
//! stream delivers its first settled snapshot, then latches the decision:
//! the session stream is the sole driver, so no further transition logic
//! exists.

use tokio::sync::watch;
use tracing::debug;

use hearth_core::session::SessionSnapshot;

/// Gate decision for the protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The first session resolution has not arrived yet; render nothing.
    Pending,
    /// A session is present; the protected view may render.
    Authenticated,
    /// No session; redirect to the auth surface.
    Unauthenticated,
}

/// Session-driven access gate.
pub struct RouteGuard {
    sessions: watch::Receiver<SessionSnapshot>,
    state: GuardState,
}

impl RouteGuard {
    /// Creates a guard over a session subscription. The guard starts
    /// `Pending` even if the receiver already holds a settled snapshot;
    /// the decision is made in [`resolve`](Self::resolve).
    pub fn new(sessions: watch::Receiver<SessionSnapshot>) -> Self {
        Self {
            sessions,
            state: GuardState::Pending,
        }
    }

    /// The current gate state.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Waits for the first settled session snapshot and latches the
    /// decision. Subsequent calls return the latched state without
    /// consulting the stream again.
    ///
    /// A stream that fails (sender dropped) while still pending is
    /// indistinguishable from "no session" and resolves to
    /// [`GuardState::Unauthenticated`].
    pub async fn resolve(&mut self) -> GuardState {
        if self.state != GuardState::Pending {
            return self.state;
        }

        loop {
            let snapshot = self.sessions.borrow_and_update().clone();
            if !snapshot.pending {
                self.state = if snapshot.session.is_some() {
                    GuardState::Authenticated
                } else {
                    GuardState::Unauthenticated
                };
                debug!(state = ?self.state, "route guard resolved");
                return self.state;
            }

            if self.sessions.changed().await.is_err() {
                debug!("session stream closed while pending");
                self.state = GuardState::Unauthenticated;
                return self.state;
            }
        }
    }
}
