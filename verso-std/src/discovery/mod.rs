//! # Discovery
//!
//! Builds an [`ApiTable`] from a directory tree:
//!
//! ```text
//! api/                      <- discovery root
//! ├── v1/                   <- version "v1"
//! │   ├── ping.js           <- "ping"
//! │   └── users/
//! │       ├── create.js     <- "users-create"
//! │       └── admin/
//! │           └── ban.js    <- "users-admin-ban"
//! └── v2/
//!     └── ping.js
//! ```
//!
//! Each immediate subdirectory of the root is a version. Every regular file
//! below it is handed to the configured [`MethodLoader`] and registered under
//! its flattened key. Entries are visited in name order, so the outcome of a
//! walk is the same on every platform.
//!
//! Versions are walked concurrently; the table is returned only after every
//! version has been populated.

mod entry;
mod walker;

use crate::{
    config::DiscoveryConfig,
    table::{ApiTable, MethodMap, MethodMapBuilder},
};
use entry::{Entry, EntryKind, check_root, read_sorted};
use futures::future::try_join_all;
use verso_core::{BuildError, MethodLoader};

/// A configured discovery run.
///
/// # Example
///
/// ```rust,ignore
/// let discovery = Discovery::new(DiscoveryConfig::new("api"), catalog);
/// let table: ApiTable<Request, Response> = discovery.run().await?;
/// ```
pub struct Discovery<L> {
    config: DiscoveryConfig,
    loader: L,
}

impl<L> Discovery<L> {
    /// Pair a configuration with the loader that resolves method files.
    pub fn new(config: DiscoveryConfig, loader: L) -> Self {
        Self { config, loader }
    }

    /// The configuration in use.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// The loader in use.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Walk the discovery root and build the routing table.
    pub async fn run<In, Out>(&self) -> Result<ApiTable<In, Out>, BuildError>
    where
        L: MethodLoader<In, Out>,
        In: Send + 'static,
        Out: Send + 'static,
    {
        let root = self.config.root();
        check_root(root).await?;

        let mut versions = Vec::new();
        for entry in read_sorted(root, self.config.symlinks()).await? {
            match entry.kind {
                EntryKind::Directory => versions.push(entry),
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        path = %entry.path.display(),
                        "not a version directory, skipped"
                    );
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            root = %root.display(),
            versions = versions.len(),
            "discovering API versions"
        );

        let maps: Vec<MethodMap<In, Out>> =
            try_join_all(versions.into_iter().map(|entry| self.version(entry))).await?;
        let table = ApiTable::from_maps(maps);

        #[cfg(feature = "tracing")]
        tracing::info!(
            versions = table.len(),
            methods = table.method_count(),
            "routing table ready"
        );

        Ok(table)
    }

    async fn version<In, Out>(&self, entry: Entry) -> Result<MethodMap<In, Out>, BuildError>
    where
        L: MethodLoader<In, Out>,
        In: Send + 'static,
        Out: Send + 'static,
    {
        let mut methods = MethodMapBuilder::new(entry.name, self.config.collision());
        walker::walk(self, &entry.path, Vec::new(), &mut methods).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            version = %methods.version(),
            methods = methods.len(),
            "version discovered"
        );

        Ok(methods.build())
    }
}

impl<L> std::fmt::Debug for Discovery<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discovery")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
