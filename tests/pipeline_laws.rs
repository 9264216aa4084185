//! Property-based tests for pipeline composition laws.
//!
//! ## Synchronous Pipeline Laws
//! - **Nesting equivalence**: `pipe_fn!(f, g, h)(x) == h(g(f(x)))`
//! - **Left-to-right order**: the first function listed runs first
//! - **Identity**: `pipe_fn!(identity, f) == f == pipe_fn!(f, identity)`
//! - **Associativity**: grouping of composition does not change the result
//! - **Consistency**: `pipe!(x, f, g) == pipe_fn!(f, g)(x)`
//!
//! Using proptest, random inputs verify these laws across a wide range of
//! values.

#![cfg(feature = "pipeline")]

use fnadapt::{pipe, pipe_fn};
use proptest::prelude::*;

#[cfg(feature = "adapt")]
use fnadapt::adapt::identity;

// =============================================================================
// Nesting Equivalence
// =============================================================================

proptest! {
    /// pipe_fn!(f, g, h)(x) == h(g(f(x)))
    #[test]
    fn prop_pipe_fn_equals_nesting(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(3);

        let composed = pipe_fn!(f, g, h);

        prop_assert_eq!(composed(x), h(g(f(x))));
    }

    /// The first function listed runs first.
    #[test]
    fn prop_pipe_fn_left_to_right_order(x in any::<i32>()) {
        let add_one = |n: i32| n.wrapping_add(1);
        let double = |n: i32| n.wrapping_mul(2);

        let add_then_double = pipe_fn!(add_one, double);
        let double_then_add = pipe_fn!(double, add_one);

        prop_assert_eq!(add_then_double(x), double(add_one(x)));
        prop_assert_eq!(double_then_add(x), add_one(double(x)));
    }

    /// pipe! applies the same chain immediately.
    #[test]
    fn prop_pipe_consistent_with_pipe_fn(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        let pipe_result = pipe!(x, f, g);
        let pipe_fn_result = pipe_fn!(f, g)(x);

        prop_assert_eq!(pipe_result, pipe_fn_result);
    }
}

// =============================================================================
// Identity and Associativity
// =============================================================================

#[cfg(feature = "adapt")]
proptest! {
    /// Left identity: pipe_fn!(identity, f)(x) == f(x)
    #[test]
    fn prop_pipe_fn_left_identity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(2);

        let composed = pipe_fn!(identity, f);

        prop_assert_eq!(composed(x), f(x));
    }

    /// Right identity: pipe_fn!(f, identity)(x) == f(x)
    #[test]
    fn prop_pipe_fn_right_identity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(2);

        let composed = pipe_fn!(f, identity);

        prop_assert_eq!(composed(x), f(x));
    }
}

proptest! {
    /// Associativity: composing (f.g) then h equals f then (g.h).
    #[test]
    fn prop_pipe_fn_associativity(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(3);

        let left_grouped = pipe_fn!(pipe_fn!(f, g), h);
        let right_grouped = pipe_fn!(f, pipe_fn!(g, h));

        prop_assert_eq!(left_grouped(x), right_grouped(x));
    }
}
