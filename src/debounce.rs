//! Trailing-edge debouncing
//!
//! Collapses rapid repeated calls into one, keeping only the most recent
//! value. Instead of a timer callback, the pending call is polled from the
//! host's event-loop tick, which keeps everything on one thread.

use std::time::{Duration, Instant};

/// Collapses bursts of calls into a single trailing invocation
///
/// At most one call is pending per instance. Every `call` replaces the
/// pending value and re-arms the deadline at `now + wait`; the value is
/// released by `poll` once `wait` has elapsed with no further calls.
/// Superseded values are dropped and never observed.
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Debouncer { wait, pending: None }
    }

    /// Schedules `value`, cancelling any not-yet-released prior value
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.wait, value));
    }

    /// Releases the pending value once the quiet window has closed
    ///
    /// Returns None while no call is pending or the window is still open.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
