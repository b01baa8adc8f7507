//! Function composition helpers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Error, Function, Result, Value};

/// One step of a [`Pipeline`].
pub type Stage<T> = Box<dyn Fn(T) -> T>;

/// A sequence of functions applied one after the other.
///
/// Built by [`pipeline`].
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
    initial_state: T,
}

impl<T: Clone> Pipeline<T> {
    /// Append a stage.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Feed `input` (or the initial state when `None`) through every stage.
    pub fn run(&self, input: Option<T>) -> T {
        let start = input.unwrap_or_else(|| self.initial_state.clone());
        self.stages.iter().fold(start, |acc, stage| stage(acc))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Compose `stages` left to right. With no stages the input passes through
/// unchanged.
pub fn pipeline<T: Clone>(stages: Vec<Stage<T>>, initial_state: T) -> Pipeline<T> {
    Pipeline {
        stages,
        initial_state,
    }
}

/// Pre-bind arguments to every function in a map.
///
/// Each bound function receives the `bind_before` arguments, then its
/// call-time arguments, then the `bind_after` arguments. Bindings are
/// evaluated on every call: a binding that is itself a function is invoked
/// with no arguments to produce its value, and array values are spliced in
/// element by element.
///
/// Every key is bound. An entry that is not callable yields `Null` when its
/// bound function is called.
///
/// # Errors
///
/// [`Error::InvalidInput`] when `funcs` has no enumerable keys.
pub fn bind_functions<'a>(
    funcs: impl Into<Option<&'a Value>>,
    bind_before: &[Value],
    bind_after: &[Value],
) -> Result<BTreeMap<String, Function>> {
    let entries = funcs
        .into()
        .and_then(Value::entries)
        .ok_or_else(|| Error::invalid_input("Unable to extract keys from provided object"))?;

    let before: Arc<[Value]> = bind_before.into();
    let after: Arc<[Value]> = bind_after.into();

    Ok(entries
        .into_iter()
        .map(|(key, value)| {
            let func = value.as_function().cloned();
            let before = Arc::clone(&before);
            let after = Arc::clone(&after);
            let name = key.clone();
            let bound = Function::new(move |args| {
                let Some(func) = &func else {
                    tracing::debug!(key = %name, "called bound entry that is not a function");
                    return Value::Null;
                };
                let mut full = expand_bindings(&before);
                full.extend_from_slice(args);
                full.extend(expand_bindings(&after));
                func.call(&full)
            });
            (key, bound)
        })
        .collect())
}

fn expand_bindings(bindings: &[Value]) -> Vec<Value> {
    let mut args = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let produced = match binding {
            Value::Function(f) => f.call(&[]),
            other => other.clone(),
        };
        match produced {
            Value::Array(items) => args.extend(items),
            single => args.push(single),
        }
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;
    use serde_json::json;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn suffix(tag: &'static str) -> Stage<String> {
        Box::new(move |val: String| format!("{val}:{tag}"))
    }

    fn pipes() -> Pipeline<String> {
        pipeline(
            vec![suffix("pipe1"), suffix("pipe2"), suffix("pipe3")],
            "default".to_string(),
        )
    }

    #[test]
    fn pipeline_uses_initial_state() {
        assert_eq!(pipes().run(None), "default:pipe1:pipe2:pipe3");
    }

    #[test]
    fn pipeline_uses_given_input() {
        assert_eq!(
            pipes().run(Some("nondefault".to_string())),
            "nondefault:pipe1:pipe2:pipe3"
        );
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let p = pipeline::<i64>(Vec::new(), 7);
        assert!(p.is_empty());
        assert_eq!(p.run(None), 7);
        assert_eq!(p.run(Some(3)), 3);
    }

    #[test]
    fn pipeline_then_appends() {
        let p = pipeline::<i64>(Vec::new(), 1).then(|x| x + 1).then(|x| x * 10);
        assert_eq!(p.len(), 2);
        assert_eq!(p.run(None), 20);
    }

    /// Collects positional arguments into a map of named fields.
    fn record() -> Value {
        Value::function(|args| {
            let names = ["pre1", "pre2", "arg1", "arg2", "post1"];
            Value::Map(
                names
                    .iter()
                    .zip(args.iter())
                    .map(|(name, arg)| (name.to_string(), arg.clone()))
                    .collect(),
            )
        })
    }

    fn bound() -> BTreeMap<String, Function> {
        let funcs = Value::Map(btree! {
            "fn1".into() => record(),
            "fn2".into() => record(),
        });
        bind_functions(
            &funcs,
            &[Value::from(1i64), Value::from(json!({ "val": 1 }))],
            &[Value::from("test"), Value::from(true)],
        )
        .unwrap()
    }

    #[test]
    fn bound_function_receives_before_call_and_after_args() {
        let result = bound()["fn1"].call(&[Value::from(1i64), Value::from(2i64)]);
        assert_eq!(
            result,
            Value::from(json!({
                "pre1": 1,
                "pre2": { "val": 1 },
                "arg1": 1,
                "arg2": 2,
                "post1": "test",
            }))
        );
    }

    #[test]
    fn extra_call_args_push_after_bindings_right() {
        let result = bound()["fn2"].call(&[Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
        assert_eq!(
            result,
            Value::from(json!({
                "pre1": 1,
                "pre2": { "val": 1 },
                "arg1": 1,
                "arg2": 2,
                "post1": 3,
            }))
        );
    }

    #[test]
    fn lazy_bindings_are_evaluated_per_call() {
        let counter = Arc::new(AtomicI64::new(0));
        let tick = {
            let counter = Arc::clone(&counter);
            Value::function(move |_| Value::Integer(counter.fetch_add(1, Ordering::SeqCst)))
        };
        let echo = Value::function(|args| Value::Array(args.to_vec()));
        let funcs = Value::Map(btree! { "echo".into() => echo });

        let bound = bind_functions(&funcs, &[tick], &[Value::from(vec![8i64, 9])]).unwrap();
        let first = bound["echo"].call(&[Value::from("x")]);
        let second = bound["echo"].call(&[]);

        assert_eq!(first, Value::from(json!([0, "x", 8, 9])));
        assert_eq!(second, Value::from(json!([1, 8, 9])));
    }

    #[test]
    fn bind_functions_rejects_missing_map() {
        let err = bind_functions(None, &[], &[]).unwrap_err();
        assert!(err
            .to_string()
            .contains("Unable to extract keys from provided object"));
    }

    #[test]
    fn non_callable_entries_are_bound_and_yield_null() {
        let funcs = Value::Map(btree! {
            "fn1".into() => Value::from(1i64),
            "fn2".into() => record(),
        });
        let bound = bind_functions(&funcs, &[Value::from(1i64)], &[]).unwrap();

        assert_eq!(bound.len(), 2);
        assert_eq!(bound["fn1"].call(&[Value::from(2i64)]), Value::Null);
        assert_eq!(
            bound["fn2"].call(&[Value::from(2i64)]),
            Value::from(json!({ "pre1": 1, "pre2": 2 }))
        );
    }
}
