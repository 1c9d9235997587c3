//! Method key composition.
//!
//! A method key is the flattened address of a method inside one version:
//! the directory segments below the version root followed by the file stem,
//! joined with [`SEPARATOR`]. Segments are kept verbatim, so case and any
//! separator characters already present in a name survive unchanged.

use std::{borrow::Borrow, fmt, path::Path};

/// The character joining path segments into a method key.
pub const SEPARATOR: char = '-';

/// A flattened, dash-joined method address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodKey(String);

impl MethodKey {
    /// Join segments into a key.
    ///
    /// ```
    /// use verso_core::MethodKey;
    ///
    /// let key = MethodKey::from_segments(["users", "admin", "create"]);
    /// assert_eq!(key.as_str(), "users-admin-create");
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, segment) in segments.into_iter().enumerate() {
            if i > 0 {
                key.push(SEPARATOR);
            }
            key.push_str(segment.as_ref());
        }
        Self(key)
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MethodKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MethodKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The key segment contributed by a file: its name with the last extension
/// removed. Names with no stem (a leading dot only) are kept whole.
///
/// Returns `None` when the name is not valid UTF-8.
pub fn file_segment(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}
