//! # fnadapt
//!
//! A micro-library of independent higher-order function adapters.
//!
//! ## Overview
//!
//! Each adapter is a small, pure, self-contained helper that reshapes how a
//! function is called, with no shared state and no I/O:
//!
//! - **Pipelines**: [`pipe!`], [`pipe_fn!`] for synchronous left-to-right
//!   composition; [`AsyncPipeline`](pipeline::AsyncPipeline),
//!   [`pipe_async!`] and [`async_pipeline!`] for sequential,
//!   short-circuiting async composition
//! - **Argument shape**: arity limiting ([`ary`](adapt::ary)), collecting
//!   positional arguments into a sequence ([`collect_into2`](adapt::collect_into2)
//!   and friends), spreading a tuple into positional arguments
//!   ([`spread_over2`](adapt::spread_over2) and friends)
//! - **Argument order**: [`flip`](adapt::flip), [`flip3`](adapt::flip3),
//!   [`flip4`](adapt::flip4)
//! - **Fan-out and transformation**: [`over`](adapt::over),
//!   [`over_args`](adapt::over_args) and fixed-arity variants
//! - **Dispatch**: [`MethodTable`](adapt::MethodTable) and
//!   [`call`](adapt::call) for keyed method invocation
//! - **Callback adaptation**: [`promisify`](pipeline::promisify) for
//!   converting trailing-callback functions into future-returning ones
//!
//! ## Feature Flags
//!
//! - `adapt`: argument-shape adapters (arity, collect, spread, flip,
//!   fan-out, dispatch)
//! - `pipeline`: synchronous pipeline composition
//! - `async`: async pipeline composition and callback adaptation
//!
//! ## Example
//!
//! ```rust
//! use fnadapt::pipe_fn;
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! let transform = pipe_fn!(double, add_one);
//! assert_eq!(transform(5), 11); // add_one(double(5))
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used adapters and types.
///
/// # Usage
///
/// ```rust
/// use fnadapt::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;
}

#[cfg(feature = "adapt")]
pub mod adapt;

#[cfg(feature = "pipeline")]
pub mod pipeline;
