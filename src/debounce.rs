//! Trailing-edge debouncer
//!
//! Collapses a burst of triggers into a single execution carrying the arguments
//! of the last trigger, once the quiescence window has elapsed with no further
//! triggers. The debouncer never runs anything itself: the owner's event loop
//! polls it and executes the action with whatever `poll` hands back. Dropping
//! or cancelling it discards the pending arguments, so nothing can fire late.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<A> {
    args: A,
    deadline: Instant,
}

/// Debounces an action taking arguments of type `A`
#[derive(Debug)]
pub struct Debouncer<A> {
    window: Duration,
    pending: Option<Pending<A>>,
}

impl<A> Debouncer<A> {
    /// Create a debouncer with the given quiescence window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the quiescence window
    ///
    /// Changing the window re-creates the schedule, so any pending execution
    /// from the previous window is cancelled first.
    pub fn set_window(&mut self, window: Duration) {
        if window != self.window && self.cancel() {
            log::debug!("Debounce window changed, pending execution cancelled");
        }
        self.window = window;
    }

    /// Record a trigger now, restarting the quiescence window
    pub fn trigger(&mut self, args: A) {
        self.trigger_at(args, Instant::now());
    }

    /// Record a trigger at `now`, replacing any pending arguments
    pub fn trigger_at(&mut self, args: A, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.window,
        });
    }

    /// Take the pending arguments if their window has elapsed
    pub fn poll(&mut self) -> Option<A> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<A> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Abort the pending execution without running it
    ///
    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending execution becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
