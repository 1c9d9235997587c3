//! Per-version method maps.
//!
//! A [`MethodMapBuilder`] is filled in place while one version is walked and
//! is then frozen into an immutable [`MethodMap`]. Keys iterate in sorted
//! order.

use crate::config::CollisionPolicy;
use std::{
    collections::{BTreeMap, btree_map},
    path::{Path, PathBuf},
};
use verso_core::{BoxMethod, BuildError, MethodFile, MethodKey, RouteResult, Router};

/// A registered method together with the file it was loaded from.
pub struct MethodEntry<In, Out> {
    method: BoxMethod<In, Out>,
    source: PathBuf,
}

impl<In, Out> MethodEntry<In, Out> {
    /// The callable.
    pub fn method(&self) -> &BoxMethod<In, Out> {
        &self.method
    }

    /// The file the callable was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<In, Out> Clone for MethodEntry<In, Out> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            source: self.source.clone(),
        }
    }
}

// ============================================================================
// MethodMapBuilder - filled during discovery
// ============================================================================

/// Builder for one version's [`MethodMap`].
pub struct MethodMapBuilder<In, Out> {
    version: String,
    collision: CollisionPolicy,
    entries: BTreeMap<MethodKey, MethodEntry<In, Out>>,
}

impl<In, Out> MethodMapBuilder<In, Out> {
    /// Create an empty map for `version`.
    pub fn new(version: impl Into<String>, collision: CollisionPolicy) -> Self {
        Self {
            version: version.into(),
            collision,
            entries: BTreeMap::new(),
        }
    }

    /// The version this map belongs to.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Register `method` under the key of `file`, applying the collision policy.
    pub fn insert(
        &mut self,
        file: &MethodFile,
        method: BoxMethod<In, Out>,
    ) -> Result<(), BuildError> {
        let entry = MethodEntry {
            method,
            source: file.path().to_path_buf(),
        };

        match self.entries.entry(file.key().clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            btree_map::Entry::Occupied(mut slot) => match self.collision {
                CollisionPolicy::Reject => {
                    return Err(BuildError::KeyCollision {
                        version: self.version.clone(),
                        key: file.key().to_string(),
                        first: slot.get().source.clone(),
                        second: entry.source,
                    });
                }
                CollisionPolicy::LastWriteWins => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        version = %self.version,
                        key = %file.key(),
                        replaced = %slot.get().source.display(),
                        by = %entry.source.display(),
                        "method key overridden"
                    );
                    slot.insert(entry);
                }
            },
        }
        Ok(())
    }

    /// Get the number of registered methods.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the builder.
    pub fn build(self) -> MethodMap<In, Out> {
        MethodMap {
            version: self.version,
            entries: self.entries,
        }
    }
}

// ============================================================================
// MethodMap - immutable, shared during dispatch
// ============================================================================

/// The methods of one version, keyed by [`MethodKey`].
pub struct MethodMap<In, Out> {
    version: String,
    entries: BTreeMap<MethodKey, MethodEntry<In, Out>>,
}

impl<In, Out> MethodMap<In, Out> {
    /// The version this map belongs to.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up a method by key.
    pub fn get(&self, key: &str) -> Option<&BoxMethod<In, Out>> {
        self.entries.get(key).map(MethodEntry::method)
    }

    /// Look up the full entry for a key.
    pub fn entry(&self, key: &str) -> Option<&MethodEntry<In, Out>> {
        self.entries.get(key)
    }

    /// The file a method was loaded from.
    pub fn source(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(MethodEntry::source)
    }

    /// Registered keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &MethodKey> {
        self.entries.keys()
    }

    /// Registered entries, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&MethodKey, &MethodEntry<In, Out>)> {
        self.entries.iter()
    }

    /// Get the number of methods.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the version holds no methods.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<In, Out> Router<str, BoxMethod<In, Out>> for MethodMap<In, Out> {
    fn route(&self, key: &str) -> RouteResult<'_, BoxMethod<In, Out>> {
        self.get(key).into()
    }
}

impl<In, Out> std::fmt::Debug for MethodMap<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodMap")
            .field("version", &self.version)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
