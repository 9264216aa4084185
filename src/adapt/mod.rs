//! Argument-shape adapters for higher-order function manipulation.
//!
//! This module provides small, independent adapters that change how a
//! function receives its arguments. None of them share state and none
//! perform I/O; each one wraps a function and delegates.
//!
//! # Overview
//!
//! - [`ary`] / [`unary`]: limit how many leading arguments reach a
//!   sequence-taking function
//! - [`collect_into1`] through [`collect_into5`]: call a sequence-taking
//!   function with individually supplied positional arguments
//! - [`spread_over1`] through [`spread_over5`]: call a positional function
//!   with a single tuple argument
//! - [`flip`], [`flip3`], [`flip4`]: move the first argument to the last
//!   position
//! - [`over`]: apply several functions to the same arguments and collect
//!   the results
//! - [`over_args`], [`over_args2`], [`over_args3`]: transform each
//!   argument before delegating
//! - [`MethodTable`] and [`call`]: keyed method dispatch with an explicit
//!   lookup-failure result
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: creates a function that always returns the same value
//!
//! # Failure Surface
//!
//! Most adapters cannot fail by construction: excess arguments are
//! truncated, tuple lengths are checked by the type system, and fixed-arity
//! transforms are supplied one per position. The two runtime failures are
//! keyed dispatch on a missing key and sequence-based argument
//! transformation with too few transforms, both reported as [`AdaptError`].
//!
//! # Examples
//!
//! ## Limiting arity
//!
//! ```
//! use fnadapt::adapt::ary;
//!
//! fn largest(values: Vec<i32>) -> i32 {
//!     values.into_iter().max().unwrap_or(i32::MIN)
//! }
//!
//! let largest_of_two = ary(largest, 2);
//! assert_eq!(largest_of_two(vec![2, 6, 9]), 6);
//! ```
//!
//! ## Fan-out
//!
//! ```
//! use fnadapt::adapt::over;
//!
//! let smallest: Box<dyn Fn(Vec<i32>) -> i32> =
//!     Box::new(|values| values.into_iter().min().unwrap_or(i32::MAX));
//! let largest: Box<dyn Fn(Vec<i32>) -> i32> =
//!     Box::new(|values| values.into_iter().max().unwrap_or(i32::MIN));
//!
//! let extremes = over(vec![smallest, largest]);
//! assert_eq!(extremes(vec![1, 5, 3]), vec![1, 5]);
//! ```

mod arity;
mod collect;
mod combinators;
mod dispatch;
mod error;
mod over;
mod spread;

pub use arity::{ary, unary};
pub use collect::{collect_into1, collect_into2, collect_into3, collect_into4, collect_into5};
pub use combinators::{constant, flip, flip3, flip4, identity};
pub use dispatch::{MethodTable, call};
pub use error::AdaptError;
pub use over::{over, over_args, over_args2, over_args3};
pub use spread::{spread_over1, spread_over2, spread_over3, spread_over4, spread_over5};
