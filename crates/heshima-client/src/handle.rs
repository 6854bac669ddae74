//! Shared-state plumbing for the operation handles.
//!
//! Each handle owns an `Arc<Mutex<S>>`. In-flight futures hold only a
//! `Weak`, so once the handle is dropped a late completion finds nothing to
//! update and is discarded.
//!
//! ```text
//! begin() ──► InFlight ──complete(outcome)──► state updated (or Detached)
//!                │
//!                └──dropped unfinished──► rollback: state leaves Loading /
//!                                         Submitting, a new attempt may start
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

/// What happened when an operation's future finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was written into the handle's state.
    Applied,
    /// The operation had already been issued once; nothing was sent.
    AlreadyIssued,
    /// The handle was dropped before the response arrived; nothing changed.
    Detached,
}

/// Locks state, recovering from poisoning. State transitions never panic
/// halfway, so a poisoned value is still consistent.
pub(crate) fn lock<S>(state: &Mutex<S>) -> MutexGuard<'_, S> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn shared<S>(value: S) -> Arc<Mutex<S>> {
    Arc::new(Mutex::new(value))
}

/// An operation that has run `begin` and owes its state an outcome.
///
/// Moved into the operation's future. If that future is dropped before
/// [`InFlight::complete`] (never polled, `select!`, timeout), `rollback`
/// runs on the state so it does not stay busy forever.
pub(crate) struct InFlight<S> {
    state: Weak<Mutex<S>>,
    operation: &'static str,
    rollback: Option<fn(&mut S)>,
}

impl<S> InFlight<S> {
    pub(crate) fn new(state: &Arc<Mutex<S>>, operation: &'static str, rollback: fn(&mut S)) -> Self {
        InFlight {
            state: Arc::downgrade(state),
            operation,
            rollback: Some(rollback),
        }
    }

    /// Applies `update` if the owning handle is still alive.
    pub(crate) fn complete(mut self, update: impl FnOnce(&mut S)) -> Completion {
        self.rollback = None;
        match self.state.upgrade() {
            Some(state) => {
                update(&mut lock(&state));
                Completion::Applied
            }
            None => {
                debug!(operation = self.operation, "Handle dropped before completion, discarding result");
                Completion::Detached
            }
        }
    }
}

impl<S> Drop for InFlight<S> {
    fn drop(&mut self) {
        let Some(rollback) = self.rollback.take() else {
            return;
        };
        if let Some(state) = self.state.upgrade() {
            debug!(operation = self.operation, "Operation dropped before completion, rolling back");
            rollback(&mut lock(&state));
        }
    }
}
