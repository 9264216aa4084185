//! `AsyncPipeline` - composed asynchronous pipelines with short-circuiting.
//!
//! An [`AsyncPipeline`] is a single unary async function built from an
//! ordered sequence of steps. Each step runs to completion before the next
//! begins, each step's output becomes the next step's input, and the first
//! failing step settles the whole run with its error.
//!
//! # Design
//!
//! The pipeline wraps a boxed step closure returning a boxed future, so
//! steps of different concrete types compose into one value. Nothing runs
//! until [`run`](AsyncPipeline::run) is awaited, and the result is only
//! available asynchronously.
//!
//! A pipeline always contains at least one step: [`AsyncPipeline::new`]
//! takes the first step, so the empty pipeline is unrepresentable.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fnadapt::pipeline::AsyncPipeline;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x + 1) })
//!         .then(|x| async move { Ok(x * 2) })
//!         .map(|x| x.to_string());
//!     assert_eq!(pipeline.run(20).await, Ok("42".to_string()));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

/// A composed asynchronous pipeline from `A` to `B`, failing with `E`.
///
/// Steps are applied strictly in sequence, left to right: step `i + 1`
/// never begins before step `i`'s resolution is observed, and no two
/// steps ever execute concurrently. The first step returning `Err` settles
/// the run with that error and no later step executes. This is
/// propagation, not recovery: the pipeline offers no retry and no
/// cancellation of a step once started.
///
/// # Type Parameters
///
/// - `A`: The input type of the first step.
/// - `B`: The output type of the last step.
/// - `E`: The error type shared by all steps.
///
/// # Examples
///
/// ```rust,ignore
/// use fnadapt::pipeline::AsyncPipeline;
///
/// #[tokio::main]
/// async fn main() {
///     let pipeline = AsyncPipeline::new(|name: &str| async move {
///         Ok::<_, String>(format!("hi {name}"))
///     });
///     assert_eq!(pipeline.run("sam").await, Ok("hi sam".to_string()));
/// }
/// ```
pub struct AsyncPipeline<A, B, E> {
    /// The composed step: consumes the input, yields the final result.
    run_pipeline: Box<dyn FnOnce(A) -> Pin<Box<dyn Future<Output = Result<B, E>> + Send>> + Send>,
}

impl<A, B, E> AsyncPipeline<A, B, E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    /// Creates a pipeline from its first step.
    ///
    /// The step is an async fallible function; it will not run until
    /// [`run`](Self::run) is awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use fnadapt::pipeline::AsyncPipeline;
    ///
    /// let pipeline = AsyncPipeline::new(|x: i32| async move {
    ///     Ok::<_, String>(x + 1)
    /// });
    /// ```
    pub fn new<F, Fut>(step: F) -> Self
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Result<B, E>> + Send + 'static,
    {
        Self {
            run_pipeline: Box::new(move |input| Box::pin(step(input))),
        }
    }

    /// Appends an async fallible step.
    ///
    /// The step receives the previous step's success value. It is not
    /// invoked at all when an earlier step has already failed.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x + 1) })
    ///     .then(|x| async move { Ok(x * 2) });
    /// ```
    pub fn then<C, F, Fut>(self, step: F) -> AsyncPipeline<A, C, E>
    where
        C: Send + 'static,
        F: FnOnce(B) -> Fut + Send + 'static,
        Fut: Future<Output = Result<C, E>> + Send + 'static,
    {
        AsyncPipeline {
            run_pipeline: Box::new(move |input| {
                Box::pin(async move {
                    let value = (self.run_pipeline)(input).await?;
                    step(value).await
                })
            }),
        }
    }

    /// Appends a synchronous infallible step.
    ///
    /// Plain-value steps need no future of their own; the transformation
    /// is applied to the previous step's success value in place.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x + 1) })
    ///     .map(|x| x.to_string());
    /// ```
    pub fn map<C, F>(self, step: F) -> AsyncPipeline<A, C, E>
    where
        C: Send + 'static,
        F: FnOnce(B) -> C + Send + 'static,
    {
        AsyncPipeline {
            run_pipeline: Box::new(move |input| {
                Box::pin(async move {
                    let value = (self.run_pipeline)(input).await?;
                    Ok(step(value))
                })
            }),
        }
    }

    /// Drives the pipeline with the given input.
    ///
    /// Resolves with the final step's value, or with the first failing
    /// step's error.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails; no subsequent step
    /// executes.
    pub async fn run(self, input: A) -> Result<B, E> {
        (self.run_pipeline)(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_single_step_pipeline() {
        let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x + 1) });
        assert_eq!(pipeline.run(41).await, Ok(42));
    }

    #[rstest]
    #[tokio::test]
    async fn test_steps_run_in_sequence() {
        let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x + 1) })
            .then(|x| async move { Ok(x * 2) })
            .then(|x| async move { Ok(x - 3) });
        // ((5 + 1) * 2) - 3
        assert_eq!(pipeline.run(5).await, Ok(9));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_applies_synchronous_step() {
        let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x * 2) })
            .map(|x| x.to_string());
        assert_eq!(pipeline.run(21).await, Ok("42".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_failure_short_circuits() {
        let counter = Arc::new(AtomicUsize::new(0));
        let first_counter = counter.clone();
        let second_counter = counter.clone();
        let third_counter = counter.clone();

        let pipeline = AsyncPipeline::new(move |x: i32| async move {
            first_counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(x)
        })
        .then(move |_| async move {
            second_counter.fetch_add(1, Ordering::SeqCst);
            Err::<i32, _>("boom".to_string())
        })
        .then(move |x| async move {
            third_counter.fetch_add(1, Ordering::SeqCst);
            Ok(x + 1)
        });

        assert_eq!(pipeline.run(0).await, Err("boom".to_string()));
        // The step after the failing one never ran.
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_nothing_runs_before_run_is_awaited() {
        let executed = Arc::new(AtomicUsize::new(0));
        let executed_clone = executed.clone();

        let pipeline = AsyncPipeline::new(move |x: i32| async move {
            executed_clone.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(x)
        });

        assert_eq!(executed.load(Ordering::SeqCst), 0);
        let result = pipeline.run(7).await;
        assert_eq!(executed.load(Ordering::SeqCst), 1);
        assert_eq!(result, Ok(7));
    }

    #[rstest]
    #[tokio::test]
    async fn test_type_changes_across_steps() {
        let pipeline = AsyncPipeline::new(|x: i32| async move { Ok::<_, String>(x.to_string()) })
            .then(|s: String| async move { Ok(s.len()) })
            .map(|length| length * 5);
        assert_eq!(pipeline.run(100).await, Ok(15));
    }
}
