#![allow(dead_code)]

use std::{
    fs,
    future::ready,
    path::{Path, PathBuf},
};
use tempfile::TempDir;
use verso::{BoxMethod, DiscoveryConfig, LoadError, MethodFile, boxed};

// ============================================================================
// Directory Fixture
// ============================================================================

/// A temporary `api/` tree that is removed on drop.
pub struct ApiTree {
    _dir: TempDir,
    root: PathBuf,
}

impl ApiTree {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("api");
        fs::create_dir(&root).unwrap();
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a file below the root, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Create an (empty) directory below the root.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.root.join(relative)).unwrap();
        self
    }

    pub fn config(&self) -> DiscoveryConfig {
        DiscoveryConfig::new(&self.root)
    }
}

// ============================================================================
// Test Loaders
// ============================================================================

/// Binds every file to a method returning the file's relative name, which
/// tells apart files that share a key.
pub fn load_relative_name(file: &MethodFile) -> Result<BoxMethod<(), String>, LoadError> {
    let name = file.relative_name();
    Ok(boxed(move |_: ()| ready(name.clone())))
}
