//! Callback-to-future adaptation.
//!
//! Callback-oriented APIs take a trailing callback and report their
//! outcome through it. [`promisify`] adapts such a function into one
//! returning a future, so callers can `await` the outcome instead.
//!
//! The error-first callback pair of callback-oriented ecosystems collapses
//! naturally into [`Result`]: the wrapped function invokes its callback
//! once with `Ok(value)` or `Err(error)`, and the adapter resolves or
//! rejects accordingly. The callback is `FnOnce` and settlement goes
//! through a oneshot channel, so exactly one settlement per call holds by
//! construction.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::oneshot;

/// The outcome callback handed to a promisified function.
///
/// The wrapped function must invoke it exactly once with the call's
/// outcome. Invoking it is consuming; never invoking it surfaces as
/// [`PromisifyError::Dropped`] on the awaiting side.
pub type Callback<T, E> = Box<dyn FnOnce(Result<T, E>) + Send>;

/// Represents a failed settlement of a promisified call.
///
/// # Examples
///
/// ```rust
/// use fnadapt::pipeline::PromisifyError;
///
/// let error: PromisifyError<String> = PromisifyError::Rejected("boom".to_string());
/// assert_eq!(format!("{}", error), "promisify: call rejected: boom");
///
/// let dropped: PromisifyError<String> = PromisifyError::Dropped;
/// assert_eq!(
///     format!("{}", dropped),
///     "promisify: callback dropped without being invoked"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromisifyError<E> {
    /// The wrapped function reported a failure through its callback.
    Rejected(E),
    /// The wrapped function dropped its callback without invoking it.
    Dropped,
}

impl<E: std::fmt::Display> std::fmt::Display for PromisifyError<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(error) => write!(formatter, "promisify: call rejected: {error}"),
            Self::Dropped => write!(
                formatter,
                "promisify: callback dropped without being invoked"
            ),
        }
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for PromisifyError<E> {}

/// Adapts a trailing-callback function into a future-returning one.
///
/// The wrapped function receives its argument and a [`Callback`]; the
/// returned adapter yields a future that settles when the callback is
/// invoked. Success resolves with the callback's `Ok` value; a callback
/// invoked with `Err` rejects with [`PromisifyError::Rejected`]; a
/// callback dropped without being invoked rejects with
/// [`PromisifyError::Dropped`] rather than hanging.
///
/// The wrapped function may invoke its callback synchronously or hand it
/// to another thread; the future settles either way.
///
/// # Examples
///
/// ```rust,ignore
/// use fnadapt::pipeline::{promisify, Callback};
///
/// fn lookup(key: u32, callback: Callback<String, String>) {
///     if key == 42 {
///         callback(Ok("answer".to_string()));
///     } else {
///         callback(Err(format!("unknown key {key}")));
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let async_lookup = promisify(lookup);
///     assert_eq!(async_lookup(42).await, Ok("answer".to_string()));
/// }
/// ```
pub fn promisify<A, T, E, F>(
    function: F,
) -> impl FnOnce(A) -> Pin<Box<dyn Future<Output = Result<T, PromisifyError<E>>> + Send>>
where
    F: FnOnce(A, Callback<T, E>) + Send + 'static,
    A: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    move |argument| {
        Box::pin(async move {
            let (sender, receiver) = oneshot::channel();
            function(
                argument,
                Box::new(move |outcome| {
                    // A second invocation is unrepresentable: the callback is FnOnce.
                    let _ = sender.send(outcome);
                }),
            );
            match receiver.await {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(error)) => Err(PromisifyError::Rejected(error)),
                Err(_) => Err(PromisifyError::Dropped),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn succeed(value: i32, callback: Callback<i32, String>) {
        callback(Ok(value * 2));
    }

    fn reject(_: i32, callback: Callback<i32, String>) {
        callback(Err("rejected".to_string()));
    }

    fn abandon(_: i32, callback: Callback<i32, String>) {
        drop(callback);
    }

    #[rstest]
    #[tokio::test]
    async fn test_promisify_resolves_with_callback_value() {
        let doubled = promisify(succeed);
        assert_eq!(doubled(21).await, Ok(42));
    }

    #[rstest]
    #[tokio::test]
    async fn test_promisify_rejects_with_callback_error() {
        let failing = promisify(reject);
        assert_eq!(
            failing(0).await,
            Err(PromisifyError::Rejected("rejected".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_promisify_surfaces_dropped_callback() {
        let abandoned = promisify(abandon);
        assert_eq!(abandoned(0).await, Err(PromisifyError::Dropped));
    }

    #[rstest]
    #[tokio::test]
    async fn test_promisify_with_callback_on_another_thread() {
        let threaded = promisify(|value: i32, callback: Callback<i32, String>| {
            std::thread::spawn(move || callback(Ok(value + 1)));
        });
        assert_eq!(threaded(41).await, Ok(42));
    }
}
