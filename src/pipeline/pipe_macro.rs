//! The `pipe!` and `pipe_fn!` macros for left-to-right composition.
//!
//! [`pipe!`](crate::pipe) threads a value through functions immediately;
//! [`pipe_fn!`](crate::pipe_fn) composes functions into a single reusable
//! closure without applying it.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ```
/// use fnadapt::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // double(5) = 10, add_one(10) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Type conversion through a pipeline
///
/// ```
/// use fnadapt::pipe;
///
/// fn render(x: i32) -> String { x.to_string() }
/// fn measure(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, render, measure), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

/// Composes functions into a single closure, applied left to right.
///
/// `pipe_fn!(f, g, h)` produces a closure equivalent to
/// `move |x| h(g(f(x)))`. Unlike [`pipe!`](crate::pipe), nothing is
/// applied until the returned closure is called, and the closure can be
/// called repeatedly when the composed functions implement [`Fn`].
///
/// At least one function is required: `pipe_fn!()` does not compile,
/// since a pipeline of zero functions has no value to produce.
///
/// # Examples
///
/// ```
/// use fnadapt::pipe_fn;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn halve(x: i32) -> i32 { x / 2 }
///
/// let shrink = pipe_fn!(square, halve);
/// assert_eq!(shrink(6), 18); // halve(square(6))
/// assert_eq!(shrink(4), 8);
/// ```
///
/// ## Single function
///
/// ```
/// use fnadapt::pipe_fn;
///
/// let double = pipe_fn!(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
///
/// ## Equivalence with pipe!
///
/// ```
/// use fnadapt::{pipe, pipe_fn};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// let composed = pipe_fn!(f, g);
/// assert_eq!(composed(10), pipe!(10, f, g));
/// ```
#[macro_export]
macro_rules! pipe_fn {
    // Single function: delegate directly
    ($function:expr $(,)?) => {
        move |input| ($function)(input)
    };

    // Multiple functions: feed the first into the composition of the rest
    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {
        move |input| $crate::pipe_fn!($($remaining_functions),+)(($function)(input))
    };
}
