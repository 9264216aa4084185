//! Multi-function fan-out and per-argument transformation.
//!
//! [`over`] applies several functions to the same call-time arguments and
//! collects their results in registration order. The `over_args` family
//! transforms each argument before delegating to a target function: the
//! sequence-based [`over_args`] checks the transform count at invocation
//! time, while the fixed-arity [`over_args2`] and [`over_args3`] make a
//! count mismatch unrepresentable.

use crate::adapt::AdaptError;

/// Applies every function to the same arguments, collecting the results.
///
/// The call-time arguments are cloned for each function; results are
/// returned in the order the functions were supplied, regardless of
/// argument order.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::over;
///
/// let smallest: Box<dyn Fn(Vec<i32>) -> i32> =
///     Box::new(|values| values.into_iter().min().unwrap_or(i32::MAX));
/// let largest: Box<dyn Fn(Vec<i32>) -> i32> =
///     Box::new(|values| values.into_iter().max().unwrap_or(i32::MIN));
///
/// let extremes = over(vec![smallest, largest]);
/// assert_eq!(extremes(vec![1, 5, 3]), vec![1, 5]);
/// ```
pub fn over<Arguments, R>(
    functions: Vec<Box<dyn Fn(Arguments) -> R>>,
) -> impl Fn(Arguments) -> Vec<R>
where
    Arguments: Clone,
{
    move |arguments| {
        functions
            .iter()
            .map(|function| function(arguments.clone()))
            .collect()
    }
}

/// Transforms each argument in an ordered sequence before delegating.
///
/// `transforms[i]` is applied to the i-th call-time argument; the
/// transformed sequence is passed, in order, to the target function.
/// Extra transforms beyond the argument count are ignored.
///
/// # Errors
///
/// The returned closure yields [`AdaptError::MissingTransform`] when more
/// arguments than transforms are supplied at invocation time.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::over_args;
///
/// let square: Box<dyn Fn(i32) -> i32> = Box::new(|x| x * x);
/// let double: Box<dyn Fn(i32) -> i32> = Box::new(|x| x * 2);
///
/// let transformed_sum = over_args(
///     |values: Vec<i32>| values.into_iter().sum::<i32>(),
///     vec![square, double],
/// );
/// // square(9) + double(3) = 81 + 6
/// assert_eq!(transformed_sum(vec![9, 3]), Ok(87));
/// assert!(transformed_sum(vec![1, 2, 3]).is_err());
/// ```
pub fn over_args<T, U, R, F>(
    function: F,
    transforms: Vec<Box<dyn Fn(T) -> U>>,
) -> impl Fn(Vec<T>) -> Result<R, AdaptError>
where
    F: Fn(Vec<U>) -> R,
{
    move |arguments| {
        if arguments.len() > transforms.len() {
            return Err(AdaptError::MissingTransform {
                supplied: transforms.len(),
                required: arguments.len(),
            });
        }
        let transformed = arguments
            .into_iter()
            .zip(transforms.iter())
            .map(|(argument, transform)| transform(argument))
            .collect();
        Ok(function(transformed))
    }
}

/// Transforms both arguments of a binary function before delegating.
///
/// Fixed-arity variant of [`over_args`]: one transform per position is
/// required structurally, so this adapter cannot fail and the argument
/// types may differ per position.
///
/// # Examples
///
/// ```
/// use fnadapt::adapt::over_args2;
///
/// let annotate = over_args2(
///     |label: String, value: String| format!("{label}: {value}"),
///     |label: &str| label.to_uppercase(),
///     |value: i32| value.to_string(),
/// );
/// assert_eq!(annotate("total", 42), "TOTAL: 42");
/// ```
#[inline]
pub fn over_args2<A1, A2, B1, B2, R, F, T1, T2>(
    function: F,
    first_transform: T1,
    second_transform: T2,
) -> impl Fn(A1, A2) -> R
where
    F: Fn(B1, B2) -> R,
    T1: Fn(A1) -> B1,
    T2: Fn(A2) -> B2,
{
    move |first_argument, second_argument| {
        function(
            first_transform(first_argument),
            second_transform(second_argument),
        )
    }
}

/// Transforms all three arguments of a ternary function before delegating.
///
/// See [`over_args2`].
#[inline]
pub fn over_args3<A1, A2, A3, B1, B2, B3, R, F, T1, T2, T3>(
    function: F,
    first_transform: T1,
    second_transform: T2,
    third_transform: T3,
) -> impl Fn(A1, A2, A3) -> R
where
    F: Fn(B1, B2, B3) -> R,
    T1: Fn(A1) -> B1,
    T2: Fn(A2) -> B2,
    T3: Fn(A3) -> B3,
{
    move |first_argument, second_argument, third_argument| {
        function(
            first_transform(first_argument),
            second_transform(second_argument),
            third_transform(third_argument),
        )
    }
}
