//! Timing control for function calls.
//!
//! - [`debounce`]: run only the last call of a burst, `wait` after it
//! - [`throttle`]: run at most once per `wait` window, on the leading
//!   and/or trailing edge
//!
//! Both wrappers schedule their deferred invocations as tokio tasks and use
//! tokio's clock, so they must be called from within a tokio runtime, and
//! tests can drive them with a paused clock.

mod debounce;
mod throttle;

pub use debounce::{debounce, Debounced, DEFAULT_DEBOUNCE_WAIT};
pub use throttle::{throttle, ThrottleOptions, Throttled};
