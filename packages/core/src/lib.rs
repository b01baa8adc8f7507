//! Grabbag core: helpers over a dynamically-typed value tree.
//!
//! - `Value`: the tree every helper works on (the JSON data model plus
//!   bytes and callable functions)
//! - `Path`: dotted path addressing a location inside a `Value`
//! - predicates: runtime type checks
//! - `get` / `set`: path-based access, `set` mutates in place
//! - `map_values` / `filter_object`: key-preserving map transforms
//! - `pipeline` / `bind_functions`: function composition
//! - `get_string_hash` / `get_json_hash`: 32-bit rolling hashes
//!
//! Absence ("undefined") is `None` throughout.
//!
//! # Example
//!
//! ```rust
//! use grabbag_core::{get, set, SetOptions, Value};
//!
//! let mut state = Value::map();
//! set(&mut state, "chat.creative.channel", Value::from(1234i64), SetOptions::create())?;
//! assert_eq!(get(&state, "chat.creative.channel", None), Some(&Value::from(1234i64)));
//! # Ok::<(), grabbag_core::Error>(())
//! ```

mod accessor;
mod combinators;
mod convert;
mod error;
mod hash;
mod path;
pub mod predicates;
mod text;
mod transform;
mod value;

pub use accessor::{get, get_as_numbers, set, SetOptions};
pub use combinators::{bind_functions, pipeline, Pipeline, Stage};
pub use convert::to_json;
pub use error::{Error, Result};
pub use hash::{get_json_hash, get_string_hash};
pub use path::Path;
pub use predicates::{
    is_function, is_null, is_null_or_undefined, is_number, is_object, is_object_like,
    is_plain_object, is_string, is_undefined, is_valid_string,
};
pub use text::capitalize;
pub use transform::{filter_object, map_values};
pub use value::{Function, Value};
