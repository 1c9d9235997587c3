//! # Loader Layer
//!
//! A loader turns one discovered method file into a callable. It is the
//! single place where a file on disk meets code: discovery decides *which*
//! files become methods and under *which* key, the loader decides *what*
//! each file resolves to.
//!
//! Load failures are construction-time errors. A loader must not defer them
//! to call time.

use crate::{error::LoadError, key::MethodKey, method::BoxMethod};
use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// A method file found during discovery, with its resolved address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodFile {
    version: String,
    path: PathBuf,
    segments: Vec<String>,
    key: MethodKey,
}

impl MethodFile {
    /// Describe a file at `path` whose key segments are `segments`.
    ///
    /// The last segment is the file stem; the others are directory names.
    pub fn new(
        version: impl Into<String>,
        path: impl Into<PathBuf>,
        segments: Vec<String>,
    ) -> Self {
        let key = MethodKey::from_segments(&segments);
        Self {
            version: version.into(),
            path: path.into(),
            segments,
            key,
        }
    }

    /// The version namespace the file belongs to.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Path of the file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory names below the version root, then the file stem.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dash-joined method key.
    pub fn key(&self) -> &MethodKey {
        &self.key
    }

    /// The file's location relative to its version root, `/`-separated, with
    /// the extension stripped (e.g. `users/create`).
    pub fn relative_name(&self) -> String {
        self.segments.join("/")
    }
}

/// Resolves a [`MethodFile`] to a callable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot load methods of type `{In} -> {Out}`",
    label = "missing `MethodLoader` implementation",
    note = "Implement `MethodLoader<{In}, {Out}>` or pass a closure `Fn(&MethodFile) -> Result<BoxMethod<{In}, {Out}>, LoadError>`."
)]
pub trait MethodLoader<In, Out>: Send + Sync {
    /// Load the method stored in `file`.
    fn load<'a>(
        &'a self,
        file: &'a MethodFile,
    ) -> impl Future<Output = Result<BoxMethod<In, Out>, LoadError>> + Send + 'a;
}

// Blanket impl for synchronous closures
impl<F, In, Out> MethodLoader<In, Out> for F
where
    F: Fn(&MethodFile) -> Result<BoxMethod<In, Out>, LoadError> + Send + Sync,
    In: 'static,
    Out: 'static,
{
    fn load<'a>(
        &'a self,
        file: &'a MethodFile,
    ) -> impl Future<Output = Result<BoxMethod<In, Out>, LoadError>> + Send + 'a {
        std::future::ready((self)(file))
    }
}
