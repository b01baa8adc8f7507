//! Resolving collections of futures.

use std::collections::BTreeMap;
use std::future::Future;

use futures::future::try_join_all;
use grabbag_core::Value;
use thiserror::Error;
use tokio::task::JoinError;

/// Input to [`resolve_promises`].
pub enum Promises<F> {
    /// Futures whose results keep their positions.
    Sequence(Vec<F>),
    /// Futures whose results keep their keys.
    Mapping(BTreeMap<String, F>),
    /// Anything else. Handed back untouched.
    Other(Value),
}

/// Output of [`resolve_promises`], mirroring the shape of the input.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<T> {
    Sequence(Vec<T>),
    Mapping(BTreeMap<String, T>),
    Other(Value),
}

/// Why an aggregate did not resolve.
#[derive(Debug, Error)]
pub enum Rejection<E> {
    /// One of the futures failed. The first failure wins.
    #[error("promise rejected: {0}")]
    Rejected(E),

    /// A future panicked or its task was cancelled by the runtime.
    #[error("promise task aborted: {0}")]
    Aborted(#[from] JoinError),
}

/// Await every future in `input`, keeping the input's shape.
///
/// Each future runs as its own tokio task. The aggregate fails as soon as
/// any future fails; the remaining tasks are not cancelled and run to
/// completion in the background.
///
/// # Panics
///
/// Panics when called outside of a tokio runtime with a non-empty sequence
/// or mapping.
pub async fn resolve_promises<F, T, E>(input: Promises<F>) -> Result<Resolved<T>, Rejection<E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    match input {
        Promises::Sequence(futures) => resolve_sequence(futures).await.map(Resolved::Sequence),
        Promises::Mapping(futures) => resolve_mapping(futures).await.map(Resolved::Mapping),
        Promises::Other(value) => Ok(Resolved::Other(value)),
    }
}

/// Await a sequence of futures, returning results in input order.
pub async fn resolve_sequence<F, T, E>(futures: Vec<F>) -> Result<Vec<T>, Rejection<E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    tracing::debug!(count = futures.len(), "spawning futures");
    let handles: Vec<_> = futures.into_iter().map(tokio::spawn).collect();

    try_join_all(handles.into_iter().map(|handle| async move {
        match handle.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Rejection::Rejected(e)),
            Err(join_error) => Err(Rejection::Aborted(join_error)),
        }
    }))
    .await
}

/// Await a map of futures, returning results under the same keys.
pub async fn resolve_mapping<F, T, E>(
    futures: BTreeMap<String, F>,
) -> Result<BTreeMap<String, T>, Rejection<E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let (keys, futures): (Vec<String>, Vec<F>) = futures.into_iter().unzip();
    let values = resolve_sequence(futures).await?;
    Ok(keys.into_iter().zip(values).collect())
}
