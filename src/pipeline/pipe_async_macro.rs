//! The `pipe_async!` and `async_pipeline!` macros.
//!
//! [`pipe_async!`](crate::pipe_async) threads a value through async
//! fallible steps inside an existing async context, awaiting each step in
//! turn and short-circuiting on the first error.
//! [`async_pipeline!`](crate::async_pipeline) builds an
//! [`AsyncPipeline`](crate::pipeline::AsyncPipeline) from a list of steps
//! without applying it.

/// Pipes a value through async fallible steps, left to right.
///
/// Each step is an async function `FnOnce(A) -> Future<Output = Result<B, E>>`.
/// Steps are awaited strictly in sequence; the first `Err` settles the
/// whole expression with that error and no later step is invoked.
///
/// Must be used inside an async context, since the expansion awaits each
/// step. At least one step is required: a zero-step invocation does not
/// compile.
///
/// # Syntax
///
/// - `pipe_async!(x, f)` - Awaits `f(x)`
/// - `pipe_async!(x, f, g, ...)` - Awaits each step in order, feeding each
///   success value to the next step
///
/// # Examples
///
/// ```rust,ignore
/// use fnadapt::pipe_async;
///
/// async fn parse(text: &str) -> Result<i32, String> {
///     text.trim().parse().map_err(|_| "not a number".to_string())
/// }
///
/// async fn double(x: i32) -> Result<i32, String> {
///     Ok(x * 2)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let result = pipe_async!(" 21 ", parse, double);
///     assert_eq!(result, Ok(42));
///
///     let failure = pipe_async!("nope", parse, double);
///     assert_eq!(failure, Err("not a number".to_string()));
/// }
/// ```
#[macro_export]
macro_rules! pipe_async {
    // Single step: await it
    ($value:expr, $function:expr $(,)?) => {
        ($function)($value).await
    };

    // Multiple steps: await the first, short-circuit on error, recurse
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        match ($function)($value).await {
            Ok(value) => $crate::pipe_async!(value, $($remaining_functions),+),
            Err(error) => Err(error),
        }
    };
}

/// Builds an [`AsyncPipeline`](crate::pipeline::AsyncPipeline) from steps.
///
/// `async_pipeline!(f, g, h)` expands to
/// `AsyncPipeline::new(f).then(g).then(h)`. Every step is an async
/// fallible function; at least one step is required.
///
/// # Examples
///
/// ```rust,ignore
/// use fnadapt::async_pipeline;
///
/// #[tokio::main]
/// async fn main() {
///     let pipeline = async_pipeline!(
///         |x: i32| async move { Ok::<_, String>(x + 1) },
///         |x| async move { Ok(x * 2) },
///     );
///     assert_eq!(pipeline.run(20).await, Ok(42));
/// }
/// ```
#[macro_export]
macro_rules! async_pipeline {
    // First step seeds the pipeline
    ($first:expr $(,)?) => {
        $crate::pipeline::AsyncPipeline::new($first)
    };

    // Remaining steps are appended in order
    ($first:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipeline::AsyncPipeline::new($first)$(.then($remaining_functions))+
    };
}
