//! Arity limiting for sequence-taking functions.
//!
//! Rust functions have fixed arity, so the variadic form of arity limiting
//! is rendered over an ordered argument sequence: the wrapped function
//! receives a `Vec` of arguments, and the adapter truncates that sequence
//! to its first `n` elements before delegating.

/// Limits how many leading arguments reach a sequence-taking function.
///
/// The returned function truncates its argument sequence to at most
/// `arity` leading elements and silently discards the rest. An `arity`
/// larger than the sequence length is a no-op: excess is truncated, never
/// an error.
///
/// # Type Parameters
///
/// * `T` - The element type of the argument sequence
/// * `R` - The return type of the wrapped function
/// * `F` - The wrapped function type
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::ary;
///
/// fn largest(values: Vec<i32>) -> i32 {
///     values.into_iter().max().unwrap_or(i32::MIN)
/// }
///
/// // Only the first two arguments are considered: max(2, 6) = 6.
/// let largest_of_two = ary(largest, 2);
/// assert_eq!(largest_of_two(vec![2, 6, 9]), 6);
/// ```
///
/// ## Arity larger than the argument count
///
/// ```
/// use fnadapt::adapt::ary;
///
/// fn count(values: Vec<i32>) -> usize { values.len() }
///
/// let count_up_to_ten = ary(count, 10);
/// assert_eq!(count_up_to_ten(vec![1, 2, 3]), 3);
/// ```
#[inline]
pub fn ary<T, R, F>(function: F, arity: usize) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
{
    move |mut arguments: Vec<T>| {
        arguments.truncate(arity);
        function(arguments)
    }
}

/// Limits a sequence-taking function to its first argument.
///
/// Equivalent to [`ary`] with an arity of 1.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::unary;
///
/// fn sum(values: Vec<i32>) -> i32 { values.into_iter().sum() }
///
/// let first_only = unary(sum);
/// assert_eq!(first_only(vec![7, 100, 1000]), 7);
/// ```
#[inline]
pub fn unary<T, R, F>(function: F) -> impl Fn(Vec<T>) -> R
where
    F: Fn(Vec<T>) -> R,
{
    ary(function, 1)
}
