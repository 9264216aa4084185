//! Pipeline composition, synchronous and asynchronous.
//!
//! This module provides left-to-right function-pipeline composition: the
//! first function listed runs first, each step's output becomes the next
//! step's input, contrasting with the right-to-left convention of
//! mathematical composition.
//!
//! # Overview
//!
//! - [`pipe!`](crate::pipe): apply a value through functions immediately
//! - [`pipe_fn!`](crate::pipe_fn): compose functions into one closure
//! - [`AsyncPipeline`]: a composed async pipeline with strict sequential
//!   ordering and error short-circuiting
//! - [`pipe_async!`](crate::pipe_async): sequential awaited application
//!   inside any async context
//! - [`async_pipeline!`](crate::async_pipeline): sugar for building an
//!   [`AsyncPipeline`] from a list of steps
//! - [`promisify`]: adapt a trailing-callback function into one returning
//!   a future
//!
//! # Empty Pipelines
//!
//! A pipeline always has at least one step. [`AsyncPipeline::new`] takes
//! the first step, and the composition macros have no zero-function arm,
//! so an empty pipeline is rejected at compile time rather than silently
//! producing nothing.
//!
//! # Example
//!
//! ```
//! use fnadapt::pipe_fn;
//!
//! fn trim(text: &str) -> &str { text.trim() }
//! fn shout(text: &str) -> String { text.to_uppercase() }
//!
//! let normalize = pipe_fn!(trim, shout);
//! assert_eq!(normalize("  hello  "), "HELLO");
//! ```

mod pipe_macro;

#[cfg(feature = "async")]
mod async_pipeline;
#[cfg(feature = "async")]
mod pipe_async_macro;
#[cfg(feature = "async")]
mod promisify;

#[cfg(feature = "async")]
pub use async_pipeline::AsyncPipeline;
#[cfg(feature = "async")]
pub use promisify::{Callback, PromisifyError, promisify};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
pub use crate::pipe_fn;
#[cfg(feature = "async")]
pub use crate::pipe_async;
