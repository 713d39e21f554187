use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::debug;

/// Sequence number of the latest request a view issued.
///
/// A view takes a [`Ticket`] before fetching and applies the result only
/// if no newer ticket was issued in the meantime.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: AtomicU64,
}

/// Proof of which request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `f` on the state if `ticket` is still current.
    ///
    /// The check happens under the write lock, so a newer request's result
    /// is never overwritten by an older one. Returns `false` when dropped.
    pub fn apply<S>(&self, ticket: Ticket, state: &RwLock<S>, view: &str, f: impl FnOnce(&mut S)) -> bool {
        let mut state = state.write().unwrap();
        if !self.is_current(ticket) {
            debug!(view, ticket = ticket.0, "stale result dropped");
            return false;
        }
        f(&mut *state);
        true
    }
}
