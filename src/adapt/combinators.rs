//! Argument-order combinators.
//!
//! This module provides fundamental combinators for reordering and
//! supplying arguments:
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`flip3`], [`flip4`]: move the first argument to the last position
//!   for ternary and quaternary functions
//!
//! For arity 2, swapping and moving-first-to-last coincide, so [`flip`]
//! serves both readings.

/// Returns the value unchanged.
///
/// The identity function is the unit element of pipeline composition:
/// `pipe_fn!(identity, f)` and `pipe_fn!(f, identity)` are both
/// equivalent to `f`.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // Replace all elements with zeros
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g` such that
/// `g(b, a) == f(a, b)`. For binary functions this is the same operation
/// as moving the first argument to the last position.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
///
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Moves the first argument of a ternary function to the last position.
///
/// Given a function `f(a, b, c)`, returns a new function `g` such that
/// `g(x, y, z) == f(y, z, x)`: the call-time first argument becomes the
/// wrapped function's last argument.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::flip3;
///
/// fn subtract3(first: i32, second: i32, third: i32) -> i32 {
///     first - second - third
/// }
///
/// let flipped = flip3(subtract3);
/// // flipped(1, 2, 3) == subtract3(2, 3, 1) == -2
/// assert_eq!(flipped(1, 2, 3), subtract3(2, 3, 1));
/// ```
#[inline]
pub fn flip3<A, B, C, R, F>(function: F) -> impl Fn(C, A, B) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |first_argument, second_argument, third_argument| {
        function(second_argument, third_argument, first_argument)
    }
}

/// Moves the first argument of a quaternary function to the last position.
///
/// Given a function `f(a, b, c, d)`, returns a new function `g` such that
/// `g(w, x, y, z) == f(x, y, z, w)`.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::flip4;
///
/// fn join(a: &str, b: &str, c: &str, d: &str) -> String {
///     format!("{a}{b}{c}{d}")
/// }
///
/// let flipped = flip4(join);
/// assert_eq!(flipped("d", "a", "b", "c"), "abcd");
/// ```
#[inline]
pub fn flip4<A, B, C, D, R, F>(function: F) -> impl Fn(D, A, B, C) -> R
where
    F: Fn(A, B, C, D) -> R,
{
    move |first_argument, second_argument, third_argument, fourth_argument| {
        function(
            second_argument,
            third_argument,
            fourth_argument,
            first_argument,
        )
    }
}
