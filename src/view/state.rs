//! The state container shared by every controller.
//!
//! A controller owns one [`StateCell`]. Its load future is the only writer:
//! every transition happens on the task that polls that future, and each one
//! is published through a `watch` channel for the presentation layer to
//! observe from its own context.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use tokio::sync::{Notify, watch};

use crate::core::FmpError;

/// Shown when a load ends in a failure outside the error taxonomy (a panic).
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Where a controller is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadPhase {
    /// Nothing loaded yet, or the last load was cancelled.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load stored a result.
    Success,
    /// The last load stored an error message.
    Failed,
}

/// Read-only view of a controller: loading flag, result data and error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState<T> {
    /// Where the controller is in its load cycle.
    pub phase: LoadPhase,
    /// The last stored result, or the empty default.
    pub data: T,
    /// At most one user-facing message; replaced on every attempt.
    pub error: Option<String>,
}

impl<T> ViewState<T> {
    /// The loading flag.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// How a call to a controller's load entry point ended.
///
/// Purely informational: errors are reported through [`ViewState::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A result was stored.
    Loaded,
    /// An error message was stored.
    Failed,
    /// The load was cancelled; no error was stored.
    Cancelled,
    /// A load was already in flight; nothing changed.
    Rejected,
}

/// What happens to the previous result when a load starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnStart {
    Keep,
    Clear,
}

pub(crate) struct StateCell<T> {
    tx: watch::Sender<ViewState<T>>,
    cancel: Notify,
}

impl<T> StateCell<T> {
    pub(crate) fn with_state(state: ViewState<T>) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            cancel: Notify::new(),
        }
    }

    pub(crate) fn snapshot(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.tx.subscribe()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.tx.borrow().is_loading()
    }

    pub(crate) fn error(&self) -> Option<String> {
        self.tx.borrow().error.clone()
    }

    /// Cancels the in-flight load, if any. Has no effect on later loads.
    pub(crate) fn cancel(&self) {
        self.cancel.notify_waiters();
    }
}

impl<T: Default> StateCell<T> {
    pub(crate) fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    /// Stores `message` as a failure without running a load.
    pub(crate) fn fail_fast(&self, message: &str, on_start: OnStart) -> LoadOutcome {
        let mut rejected = false;
        self.tx.send_if_modified(|s| {
            if s.is_loading() {
                rejected = true;
                return false;
            }
            if on_start == OnStart::Clear {
                s.data = T::default();
            }
            s.phase = LoadPhase::Failed;
            s.error = Some(message.to_string());
            true
        });
        if rejected {
            LoadOutcome::Rejected
        } else {
            LoadOutcome::Failed
        }
    }

    /// Drives `fetch` through Idle -> Loading -> (Success | Failed), or back
    /// to Idle if cancelled. Rejected while another load is in flight.
    pub(crate) async fn run<F>(&self, on_start: OnStart, fetch: F) -> LoadOutcome
    where
        F: Future<Output = Result<T, FmpError>>,
    {
        // registered before Loading is published, so a cancel() issued right
        // after the transition is never missed
        let cancelled = self.cancel.notified();

        if !self.begin(on_start) {
            #[cfg(feature = "tracing")]
            tracing::debug!("load rejected: another load is in flight");
            return LoadOutcome::Rejected;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("load started");

        let guard = InFlight {
            tx: &self.tx,
            settled: false,
        };

        let result = tokio::select! {
            biased;
            () = cancelled => None,
            r = AssertUnwindSafe(fetch).catch_unwind() => Some(r),
        };

        match result {
            Some(Ok(Ok(data))) => {
                guard.settle(|s| {
                    s.data = data;
                    s.error = None;
                    s.phase = LoadPhase::Success;
                });
                LoadOutcome::Loaded
            }
            Some(Ok(Err(e))) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "load failed");
                let message = e.user_message();
                guard.settle(|s| {
                    s.error = Some(message);
                    s.phase = LoadPhase::Failed;
                });
                LoadOutcome::Failed
            }
            Some(Err(_panic)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("load panicked");
                guard.settle(settle_panicked);
                LoadOutcome::Failed
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("load cancelled");
                guard.settle(settle_cancelled);
                LoadOutcome::Cancelled
            }
        }
    }

    fn begin(&self, on_start: OnStart) -> bool {
        self.tx.send_if_modified(|s| {
            if s.is_loading() {
                return false;
            }
            s.error = None;
            if on_start == OnStart::Clear {
                s.data = T::default();
            }
            s.phase = LoadPhase::Loading;
            true
        })
    }
}

fn settle_cancelled<T>(s: &mut ViewState<T>) {
    s.error = None;
    s.phase = LoadPhase::Idle;
}

fn settle_panicked<T>(s: &mut ViewState<T>) {
    s.error = Some(UNEXPECTED_ERROR_MESSAGE.to_string());
    s.phase = LoadPhase::Failed;
}

/// Guarantees the cell leaves Loading on every exit path, including a
/// dropped load future (cancellation) and a panic that escapes `run`.
struct InFlight<'a, T> {
    tx: &'a watch::Sender<ViewState<T>>,
    settled: bool,
}

impl<T> InFlight<'_, T> {
    fn settle(mut self, f: impl FnOnce(&mut ViewState<T>)) {
        self.settled = true;
        self.tx.send_modify(f);
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if std::thread::panicking() {
            self.tx.send_modify(settle_panicked);
        } else {
            self.tx.send_modify(settle_cancelled);
        }
    }
}
