//! # verso-core
//!
//! Core traits and errors for the Verso versioned method dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that provides methods or loaders without pulling in discovery itself.
//!
//! # Model
//!
//! - A **version** is an isolated namespace of methods (`v1`, `v2`, ...).
//! - A **method key** addresses one method inside a version. It is the
//!   dash-joined list of directory segments plus the file stem, see
//!   [`MethodKey`].
//! - A **method** is an opaque async callable, see [`Method`] and
//!   [`DynMethod`].
//! - A **loader** resolves a discovered file to a method, see
//!   [`MethodLoader`].
//!
//! # Error Types
//!
//! - [`VersoError`] - Top-level error type
//! - [`BuildError`] - Fatal construction errors
//! - [`LoadError`] - Loader errors
//! - [`CallError`] - Version/method lookup misses

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod key;
mod loader;
mod method;
mod router;

// Re-exports
pub use error::{BoxError, BuildError, CallError, LoadError, VersoError};
pub use key::{MethodKey, SEPARATOR, file_segment};
pub use loader::{MethodFile, MethodLoader};
pub use method::{BoxMethod, DynMethod, Method, MethodFuture, boxed};
pub use router::{RouteResult, Router};
