//! Recursive walk of one version tree.

use super::{
    Discovery,
    entry::{EntryKind, read_sorted},
};
use crate::{config::SymlinkPolicy, table::MethodMapBuilder};
use futures::future::{BoxFuture, FutureExt};
use std::path::Path;
use verso_core::{BuildError, MethodFile, MethodLoader, file_segment};

/// Register every file below `dir` into `methods`.
///
/// `segments` holds the directory names between the version root and `dir`.
/// Sub-directories are visited before returning, so the map is complete once
/// the future resolves.
pub(super) fn walk<'a, L, In, Out>(
    discovery: &'a Discovery<L>,
    dir: &'a Path,
    segments: Vec<String>,
    methods: &'a mut MethodMapBuilder<In, Out>,
) -> BoxFuture<'a, Result<(), BuildError>>
where
    L: MethodLoader<In, Out>,
    In: Send + 'static,
    Out: Send + 'static,
{
    async move {
        let config = &discovery.config;

        for entry in read_sorted(dir, config.symlinks()).await? {
            match entry.kind {
                EntryKind::Directory => {
                    let follows = config.symlinks() == SymlinkPolicy::Follow;
                    if follows && segments.len() >= config.max_depth() {
                        return Err(BuildError::DepthExceeded {
                            path: entry.path,
                            max_depth: config.max_depth(),
                        });
                    }
                    let mut nested = segments.clone();
                    nested.push(entry.name);
                    walk(discovery, &entry.path, nested, &mut *methods).await?;
                }
                EntryKind::File => {
                    let stem = file_segment(&entry.path).unwrap_or(entry.name.as_str());
                    let mut parts = segments.clone();
                    parts.push(stem.to_string());

                    let file = MethodFile::new(methods.version(), entry.path.clone(), parts);
                    let method = discovery.loader.load(&file).await?;

                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        version = %file.version(),
                        key = %file.key(),
                        path = %file.path().display(),
                        "method registered"
                    );
                    methods.insert(&file, method)?;
                }
                EntryKind::Symlink | EntryKind::Other => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        path = %entry.path.display(),
                        kind = ?entry.kind,
                        "entry skipped"
                    );
                }
            }
        }
        Ok(())
    }
    .boxed()
}
