//! Aggregating futures the way `Promise.all` does, for sequences and for
//! maps of futures.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use futures::future::ready;
//! use grabbag_promise::{resolve_promises, Promises, Resolved};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut input = BTreeMap::new();
//! input.insert("a".to_string(), ready(Ok::<i64, String>(1)));
//! input.insert("b".to_string(), ready(Ok::<i64, String>(2)));
//!
//! let Resolved::Mapping(out) = resolve_promises(Promises::Mapping(input)).await.unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(out["a"], 1);
//! # }
//! ```

mod resolve;

pub use resolve::{resolve_mapping, resolve_promises, resolve_sequence, Promises, Rejection, Resolved};
