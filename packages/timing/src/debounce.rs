//! Trailing-edge debouncing.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Wait used when `debounce` is given a zero duration.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(100);

/// A debounced wrapper around a function, created by [`debounce`].
///
/// Every [`call`](Debounced::call) cancels the pending invocation and
/// schedules a new one `wait` after the latest call, so only the last call
/// of a burst reaches the wrapped function.
///
/// The wrapper is meant to be driven from one task at a time. Its state is
/// behind a mutex only because the scheduled invocation runs as a tokio
/// task. Clones share the same pending slot.
pub struct Debounced<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    func: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    state: Mutex<State>,
}

/// At most one timer task is pending at any time. `generation` invalidates
/// a timer that already woke up when a newer call replaced it.
#[derive(Default)]
struct State {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Delay invocations of `func` until `wait` has elapsed since the last call.
///
/// A zero `wait` means [`DEFAULT_DEBOUNCE_WAIT`].
pub fn debounce<A, F>(func: F, wait: Duration) -> Debounced<A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    let wait = if wait.is_zero() {
        DEFAULT_DEBOUNCE_WAIT
    } else {
        wait
    };
    Debounced {
        inner: Arc::new(Inner {
            func: Box::new(func),
            wait,
            state: Mutex::new(State::default()),
        }),
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// Schedule an invocation with `args`, replacing any pending one.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn call(&self, args: A) {
        let mut state = self.inner.lock_state();
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.generation += 1;

        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        let wait = self.inner.wait;
        tracing::trace!(wait_ms = wait.as_millis() as u64, generation, "debounce scheduled");
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            inner.fire(generation, args);
        }));
    }
}

impl<A> Debounced<A> {
    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        let mut state = self.inner.lock_state();
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.inner.lock_state().pending.is_some()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Debounced {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> Inner<A> {
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn fire(&self, generation: u64, args: A) {
        {
            let mut state = self.lock_state();
            if state.generation != generation {
                return;
            }
            state.pending = None;
        }
        tracing::trace!(generation, "debounce fired");
        (self.func)(args);
    }
}
