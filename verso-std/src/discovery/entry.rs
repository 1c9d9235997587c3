//! Directory listing for discovery.

use crate::config::SymlinkPolicy;
use std::{
    fs::FileType,
    io,
    path::{Path, PathBuf},
};
use verso_core::BuildError;

/// What an entry is, after the symlink policy has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
    /// A link skipped under [`SymlinkPolicy::Skip`].
    Symlink,
    /// Fifo, socket, device or anything else that is neither file nor directory.
    Other,
}

impl EntryKind {
    fn of(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
}

/// List `dir`, sorted by entry name.
///
/// Only directories and files need UTF-8 names, since only they contribute
/// key segments. Other entries carry a lossy name for logging.
pub(crate) async fn read_sorted(
    dir: &Path,
    symlinks: SymlinkPolicy,
) -> Result<Vec<Entry>, BuildError> {
    let dir_error = |source: io::Error| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut reader = tokio::fs::read_dir(dir).await.map_err(dir_error)?;
    let mut listed = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(dir_error)? {
        let path = entry.path();
        match entry.file_type().await {
            Ok(file_type) => listed.push((entry.file_name(), path, file_type)),
            Err(source) => return Err(BuildError::Io { path, source }),
        }
    }
    listed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::with_capacity(listed.len());
    for (name, path, file_type) in listed {
        let kind = classify(&path, file_type, symlinks).await?;
        let name = match kind {
            EntryKind::Directory | EntryKind::File => match name.into_string() {
                Ok(name) => name,
                Err(_) => return Err(BuildError::NonUtf8Name { path }),
            },
            EntryKind::Symlink | EntryKind::Other => name.to_string_lossy().into_owned(),
        };
        entries.push(Entry { name, path, kind });
    }
    Ok(entries)
}

async fn classify(
    path: &Path,
    file_type: FileType,
    symlinks: SymlinkPolicy,
) -> Result<EntryKind, BuildError> {
    if !file_type.is_symlink() {
        return Ok(EntryKind::of(file_type));
    }

    match symlinks {
        SymlinkPolicy::Skip => Ok(EntryKind::Symlink),
        SymlinkPolicy::Reject => Err(BuildError::SymlinkRejected {
            path: path.to_path_buf(),
        }),
        SymlinkPolicy::Follow => match tokio::fs::metadata(path).await {
            Ok(target) => Ok(EntryKind::of(target.file_type())),
            Err(source) => Err(BuildError::Io {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

/// Fail unless `root` is an existing directory.
pub(crate) async fn check_root(root: &Path) -> Result<(), BuildError> {
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(BuildError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(BuildError::RootMissing {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(BuildError::Io {
            path: root.to_path_buf(),
            source,
        }),
    }
}
