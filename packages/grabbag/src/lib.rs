//! Grabbag: small helpers over a dynamically-typed value tree, plus timing
//! wrappers and future aggregation.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`grabbag_core`]: `Value`, `Path`, predicates, `get`/`set`, transforms,
//!   composition and hashing
//! - [`grabbag_timing`]: `debounce` and `throttle`
//! - [`grabbag_promise`]: `resolve_promises`

pub use grabbag_core::*;
pub use grabbag_promise::{
    resolve_mapping, resolve_promises, resolve_sequence, Promises, Rejection, Resolved,
};
pub use grabbag_timing::{
    debounce, throttle, Debounced, ThrottleOptions, Throttled, DEFAULT_DEBOUNCE_WAIT,
};

/// Everything most callers need, in one import.
pub mod prelude {
    pub use grabbag_core::{
        get, set, to_json, Error, Function, Path, Result, SetOptions, Value,
    };
    pub use grabbag_promise::{resolve_promises, Promises, Resolved};
    pub use grabbag_timing::{debounce, throttle, ThrottleOptions};
}
