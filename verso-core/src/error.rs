//! Error types for Verso.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VersoError`] - Top-level error type for all Verso operations
//! - [`BuildError`] - Fatal errors while constructing a routing table
//! - [`LoadError`] - Errors from a [`MethodLoader`](crate::MethodLoader)
//! - [`CallError`] - Lookup misses when dispatching a call
//!
//! Failures raised by a method implementation itself never appear here: the
//! callee's output is handed back to the caller untouched.

use std::path::PathBuf;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Verso operations.
#[derive(Error, Debug)]
pub enum VersoError {
    /// The routing table could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A call could not be routed.
    #[error("call error: {0}")]
    Call(#[from] CallError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors returned by `call` when the target cannot be found.
///
/// Both variants are recoverable; callers are expected to branch on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The requested version has no namespace in the routing table.
    #[error("Version {version} is not supported")]
    VersionNotSupported {
        /// The version that was requested.
        version: String,
    },

    /// The version exists but holds no method under the requested key.
    #[error("Method {method} is not found in version {version}")]
    MethodNotFound {
        /// The method key that was requested.
        method: String,
        /// The version that was searched.
        version: String,
    },
}

impl CallError {
    /// Returns true for [`CallError::VersionNotSupported`].
    pub fn is_version_not_supported(&self) -> bool {
        matches!(self, CallError::VersionNotSupported { .. })
    }

    /// Returns true for [`CallError::MethodNotFound`].
    pub fn is_method_not_found(&self) -> bool {
        matches!(self, CallError::MethodNotFound { .. })
    }
}

/// Errors raised by a [`MethodLoader`](crate::MethodLoader) for a single file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The method file could not be read.
    #[error("failed to read method file {}", .path.display())]
    Read {
        /// The file being loaded.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The method file is not a well-formed descriptor.
    #[error("malformed method file {}: {reason}", .path.display())]
    Malformed {
        /// The file being loaded.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The file names an entry symbol the loader does not know.
    #[error("unknown entry symbol `{symbol}` in {}", .path.display())]
    UnknownSymbol {
        /// The symbol that could not be resolved.
        symbol: String,
        /// The file that referenced it.
        path: PathBuf,
    },

    /// A custom loader error.
    #[error(transparent)]
    Custom(BoxError),
}

/// Construction-time errors. Any of these aborts building the routing table.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The discovery root does not exist.
    #[error("API folder does not exist at path: {}", .path.display())]
    RootMissing {
        /// The configured discovery root.
        path: PathBuf,
    },

    /// The discovery root exists but is not a directory.
    #[error("API root is not a directory: {}", .path.display())]
    RootNotDirectory {
        /// The configured discovery root.
        path: PathBuf,
    },

    /// A filesystem operation failed while walking the tree.
    #[error("i/o error at {}", .path.display())]
    Io {
        /// The path being inspected.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory or file name is not valid UTF-8 and cannot form a key.
    #[error("entry name is not valid UTF-8: {}", .path.display())]
    NonUtf8Name {
        /// The offending entry.
        path: PathBuf,
    },

    /// A symbolic link was found while the symlink policy forbids them.
    #[error("symbolic link rejected: {}", .path.display())]
    SymlinkRejected {
        /// The link itself.
        path: PathBuf,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("directory nesting exceeds {max_depth} levels at {}", .path.display())]
    DepthExceeded {
        /// The directory that would exceed the limit.
        path: PathBuf,
        /// The configured limit.
        max_depth: usize,
    },

    /// Two files flatten to the same method key within one version.
    #[error(
        "method key `{key}` in version {version} is produced by both {} and {}",
        .first.display(),
        .second.display()
    )]
    KeyCollision {
        /// The version namespace.
        version: String,
        /// The colliding key.
        key: String,
        /// The file registered first.
        first: PathBuf,
        /// The file that collided with it.
        second: PathBuf,
    },

    /// A method file failed to load.
    #[error("failed to load method: {0}")]
    Load(#[from] LoadError),
}

// Convenience conversions
impl From<BoxError> for VersoError {
    fn from(err: BoxError) -> Self {
        VersoError::Custom(err)
    }
}

impl From<BoxError> for LoadError {
    fn from(err: BoxError) -> Self {
        LoadError::Custom(err)
    }
}

impl From<LoadError> for VersoError {
    fn from(err: LoadError) -> Self {
        VersoError::Build(BuildError::Load(err))
    }
}
