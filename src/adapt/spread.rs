//! Adapters from an ordered sequence to positional arguments.
//!
//! The inverse of the `collect_intoN` family: a fixed-arity function is
//! wrapped so it accepts exactly one ordered-sequence argument, which is
//! spread positionally into the call.
//!
//! The sequence is a tuple rather than a `Vec`, for two reasons that
//! follow the contract: argument types may differ per position, and the
//! sequence length is checked by the type system, so a length mismatch is
//! unrepresentable and the adapter cannot fail.
//!
//! # Examples
//!
//! ```
//! use fnadapt::adapt::spread_over2;
//!
//! fn repeat(text: &str, times: usize) -> String { text.repeat(times) }
//!
//! let repeat_pair = spread_over2(repeat);
//! assert_eq!(repeat_pair(("ab", 3)), "ababab");
//! ```

macro_rules! define_spread_over {
    ($arity:literal, $(($parameter:ident, $argument:ident)),+) => {
        paste::paste! {
            #[doc = concat!(
                "Adapts a ", stringify!($arity),
                "-argument function to accept one tuple argument.\n\n",
                "The tuple's elements are spread positionally into the ",
                "wrapped function's call.",
            )]
            #[inline]
            pub fn [<spread_over $arity>]<$($parameter,)+ R, F>(
                function: F,
            ) -> impl Fn(($($parameter,)+)) -> R
            where
                F: Fn($($parameter),+) -> R,
            {
                move |($($argument,)+)| function($($argument),+)
            }
        }
    };
}

define_spread_over!(1, (A, first));
define_spread_over!(2, (A, first), (B, second));
define_spread_over!(3, (A, first), (B, second), (C, third));
define_spread_over!(4, (A, first), (B, second), (C, third), (D, fourth));
define_spread_over!(
    5,
    (A, first),
    (B, second),
    (C, third),
    (D, fourth),
    (E, fifth)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_over1_unwraps_single_element() {
        let double = spread_over1(|x: i32| x * 2);
        assert_eq!(double((21,)), 42);
    }

    #[test]
    fn test_spread_over2_with_heterogeneous_tuple() {
        let describe = spread_over2(|name: &str, age: u32| format!("{name} is {age}"));
        assert_eq!(describe(("sam", 30)), "sam is 30");
    }

    #[test]
    fn test_spread_over3_preserves_position() {
        let ordered = spread_over3(|a: i32, b: i32, c: i32| (a, b, c));
        assert_eq!(ordered((1, 2, 3)), (1, 2, 3));
    }

    #[test]
    fn test_spread_over5_delegates_result() {
        let sum = spread_over5(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
        assert_eq!(sum((1, 2, 3, 4, 5)), 15);
    }

    #[test]
    fn test_spread_then_collect_round_trip() {
        use crate::adapt::collect_into2;

        let sum = |values: Vec<i32>| values.into_iter().sum::<i32>();
        let positional = collect_into2(sum);
        let sequenced = spread_over2(positional);
        assert_eq!(sequenced((20, 22)), 42);
    }
}
