//! The versioned routing table.
//!
//! [`ApiTable`] owns every version's [`MethodMap`] and exposes the call path.
//! It is immutable once built and can be shared freely, e.g. behind an `Arc`.

mod map;

pub use map::{MethodEntry, MethodMap, MethodMapBuilder};

use crate::{config::DiscoveryConfig, discovery::Discovery};
use std::collections::BTreeMap;
use verso_core::{
    BoxMethod, BuildError, CallError, MethodFuture, MethodLoader, RouteResult, Router,
};

/// Routing table mapping version -> method key -> method.
pub struct ApiTable<In, Out> {
    versions: BTreeMap<String, MethodMap<In, Out>>,
}

impl<In, Out> ApiTable<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    /// Build a table by walking the tree described by `config`.
    ///
    /// Every version is fully populated before this returns; on any error no
    /// table is produced.
    pub async fn discover<L>(config: DiscoveryConfig, loader: L) -> Result<Self, BuildError>
    where
        L: MethodLoader<In, Out>,
    {
        Discovery::new(config, loader).run().await
    }
}

impl<In: 'static, Out: 'static> ApiTable<In, Out> {
    /// Assemble a table from already built maps.
    ///
    /// A later map for the same version replaces an earlier one.
    pub fn from_maps(maps: impl IntoIterator<Item = MethodMap<In, Out>>) -> Self {
        let versions = maps
            .into_iter()
            .map(|map| (map.version().to_string(), map))
            .collect();
        Self { versions }
    }

    /// Find the method for `(version, method)` without invoking it.
    pub fn resolve(&self, version: &str, method: &str) -> Result<&BoxMethod<In, Out>, CallError> {
        let methods = match self.route(version) {
            RouteResult::Matched(methods) => methods,
            RouteResult::NotFound => {
                return Err(CallError::VersionNotSupported {
                    version: version.to_string(),
                });
            }
        };

        match methods.route(method) {
            RouteResult::Matched(target) => Ok(target),
            RouteResult::NotFound => Err(CallError::MethodNotFound {
                method: method.to_string(),
                version: version.to_string(),
            }),
        }
    }

    /// Route a call and start the method.
    ///
    /// Lookup misses are reported immediately. On a hit the returned future
    /// resolves to the method's own output, unchanged.
    ///
    /// ```rust,ignore
    /// let created = table.call("v1", "users-create", input)?.await;
    /// ```
    pub fn call(
        &self,
        version: &str,
        method: &str,
        input: In,
    ) -> Result<MethodFuture<'_, Out>, CallError> {
        let target = self.resolve(version, method)?;
        Ok(target.call_dyn(input))
    }

    /// Route a call and await its output.
    pub async fn dispatch(
        &self,
        version: &str,
        method: &str,
        input: In,
    ) -> Result<Out, CallError> {
        Ok(self.call(version, method, input)?.await)
    }

    /// Check whether a version namespace exists.
    pub fn supports(&self, version: &str) -> bool {
        self.versions.contains_key(version)
    }

    /// The method map of one version.
    pub fn version(&self, version: &str) -> Option<&MethodMap<In, Out>> {
        self.versions.get(version)
    }

    /// Known versions, in sorted order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Get the number of versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Check if no version was discovered.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Total number of methods across all versions.
    pub fn method_count(&self) -> usize {
        self.versions.values().map(MethodMap::len).sum()
    }
}

impl<In, Out> Router<str, MethodMap<In, Out>> for ApiTable<In, Out> {
    fn route(&self, version: &str) -> RouteResult<'_, MethodMap<In, Out>> {
        self.versions.get(version).into()
    }
}

impl<In, Out> std::fmt::Debug for ApiTable<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.versions.iter()).finish()
    }
}
