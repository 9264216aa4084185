//! Adapters from positional arguments to an ordered sequence.
//!
//! A function that expects one `Vec` argument can be awkward to call when
//! the arguments are individually at hand. The `collect_intoN` family wraps
//! such a function so it can be called with `N` positional arguments,
//! collecting them into a `Vec` before delegating.
//!
//! Rust has no variadic functions, so the family is generated per arity
//! (1 through 5), following the fixed-arity-family approach used by curry
//! macro families. All positional arguments share one element type `T`,
//! since they are collected into a single `Vec<T>`.
//!
//! # Examples
//!
//! ```
//! use fnadapt::adapt::collect_into3;
//!
//! fn sum(values: Vec<i32>) -> i32 { values.into_iter().sum() }
//!
//! let add3 = collect_into3(sum);
//! assert_eq!(add3(1, 2, 3), 6);
//! ```
//!
//! ## With a closure
//!
//! ```
//! use fnadapt::adapt::collect_into2;
//!
//! let join = collect_into2(|parts: Vec<String>| parts.join(", "));
//! assert_eq!(join("a".to_string(), "b".to_string()), "a, b");
//! ```

/// Maps each positional-argument identifier to the shared element type.
macro_rules! argument_type {
    ($argument:ident) => {
        T
    };
}

macro_rules! define_collect_into {
    ($arity:literal, $($argument:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Adapts a sequence-taking function to ", stringify!($arity),
                " positional arguments.\n\n",
                "The returned function collects its arguments into a `Vec` ",
                "in call order and delegates to the wrapped function.",
            )]
            #[inline]
            pub fn [<collect_into $arity>]<T, R, F>(
                function: F,
            ) -> impl Fn($(argument_type!($argument)),+) -> R
            where
                F: Fn(Vec<T>) -> R,
            {
                move |$($argument),+| function(vec![$($argument),+])
            }
        }
    };
}

define_collect_into!(1, first);
define_collect_into!(2, first, second);
define_collect_into!(3, first, second, third);
define_collect_into!(4, first, second, third, fourth);
define_collect_into!(5, first, second, third, fourth, fifth);
