//! Leading/trailing-edge throttling.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Which edges of a throttle window invoke the wrapped function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleOptions {
    /// Invoke immediately on the first call of a window.
    pub leading: bool,
    /// Invoke once more at the end of a window with the latest arguments.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        ThrottleOptions {
            leading: true,
            trailing: true,
        }
    }
}

/// A throttled wrapper around a function, created by [`throttle`].
///
/// Invokes the wrapped function at most once per `wait` window. Each
/// [`call`](Throttled::call) returns the result of the most recent actual
/// invocation, which may be stale.
///
/// Like [`Debounced`](crate::Debounced), the wrapper is meant to be driven
/// from one task at a time and clones share state.
pub struct Throttled<A, R> {
    inner: Arc<Inner<A, R>>,
}

struct Inner<A, R> {
    func: Box<dyn Fn(A) -> R + Send + Sync>,
    wait: Duration,
    options: ThrottleOptions,
    state: Mutex<State<A, R>>,
}

struct State<A, R> {
    /// Start of the current window. `None` until the first invocation, and
    /// again after a trailing invocation when `leading` is off.
    previous: Option<Instant>,
    /// Trailing-edge timer.
    pending: Option<JoinHandle<()>>,
    /// Arguments for the trailing invocation.
    args: Option<A>,
    result: Option<R>,
    generation: u64,
}

impl<A, R> Default for State<A, R> {
    fn default() -> Self {
        State {
            previous: None,
            pending: None,
            args: None,
            result: None,
            generation: 0,
        }
    }
}

/// Invoke `func` at most once per `wait`.
pub fn throttle<A, R, F>(func: F, wait: Duration, options: ThrottleOptions) -> Throttled<A, R>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    Throttled {
        inner: Arc::new(Inner {
            func: Box::new(func),
            wait,
            options,
            state: Mutex::new(State::default()),
        }),
    }
}

impl<A, R> Throttled<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Call through the throttle.
    ///
    /// Returns the result of the last invocation of the wrapped function,
    /// or `None` if it has not run yet.
    ///
    /// # Panics
    ///
    /// Panics when a trailing invocation has to be scheduled outside of a
    /// tokio runtime.
    pub fn call(&self, args: A) -> Option<R> {
        let now = Instant::now();
        let wait = self.inner.wait;
        let options = self.inner.options;

        let mut state = self.inner.lock_state();
        if state.previous.is_none() && !options.leading {
            state.previous = Some(now);
        }
        let remaining = match state.previous {
            Some(previous) => wait.saturating_sub(now.saturating_duration_since(previous)),
            None => Duration::ZERO,
        };

        if remaining.is_zero() {
            if let Some(pending) = state.pending.take() {
                pending.abort();
            }
            state.generation += 1;
            state.previous = Some(now);
            state.args = None;
            drop(state);

            tracing::trace!("throttle fired on leading edge");
            let result = (self.inner.func)(args);
            self.inner.lock_state().result = Some(result.clone());
            return Some(result);
        }

        if options.trailing {
            state.args = Some(args);
            if state.pending.is_none() {
                let generation = state.generation;
                let inner = Arc::clone(&self.inner);
                tracing::trace!(
                    remaining_ms = remaining.as_millis() as u64,
                    "throttle scheduled trailing edge"
                );
                state.pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(remaining).await;
                    inner.fire_trailing(generation);
                }));
            }
        }
        state.result.clone()
    }
}

impl<A, R> Throttled<A, R> {
    /// Drop the pending trailing invocation and start over with a fresh
    /// window.
    pub fn cancel(&self) {
        let mut state = self.inner.lock_state();
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.generation += 1;
        state.previous = None;
        state.args = None;
    }

    pub fn is_pending(&self) -> bool {
        self.inner.lock_state().pending.is_some()
    }
}

impl<A, R> Clone for Throttled<A, R> {
    fn clone(&self) -> Self {
        Throttled {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> Inner<A, R> {
    fn lock_state(&self) -> MutexGuard<'_, State<A, R>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn fire_trailing(&self, generation: u64) {
        let args = {
            let mut state = self.lock_state();
            if state.generation != generation {
                return;
            }
            state.pending = None;
            state.previous = if self.options.leading {
                Some(Instant::now())
            } else {
                None
            };
            state.args.take()
        };
        let Some(args) = args else {
            return;
        };

        tracing::trace!("throttle fired on trailing edge");
        let result = (self.func)(args);
        self.lock_state().result = Some(result);
    }
}
