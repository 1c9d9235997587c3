//! Discovery configuration.
//!
//! The discovery root is always an explicit value. [`DiscoveryConfig::beside_executable`]
//! reproduces the conventional layout of an `api` directory next to the
//! running binary for hosts that want it.

use std::path::{Path, PathBuf};

/// Name of the conventional discovery root directory.
pub const DEFAULT_ROOT_DIR: &str = "api";

/// Default limit on directory nesting below a version root when links are
/// followed.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to do when two files in one version flatten to the same key.
///
/// `users/create.js` and `users-create.js` both produce `users-create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Fail construction with [`BuildError::KeyCollision`](verso_core::BuildError::KeyCollision).
    #[default]
    Reject,
    /// Keep the file registered last in discovery order.
    LastWriteWins,
}

/// How discovery treats symbolic links inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkPolicy {
    /// Ignore links entirely.
    #[default]
    Skip,
    /// Resolve links and treat them as their target.
    Follow,
    /// Fail construction with [`BuildError::SymlinkRejected`](verso_core::BuildError::SymlinkRejected).
    Reject,
}

/// Configuration for building a routing table from a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    root: PathBuf,
    collision: CollisionPolicy,
    symlinks: SymlinkPolicy,
    max_depth: usize,
}

impl DiscoveryConfig {
    /// Discover versions under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            collision: CollisionPolicy::default(),
            symlinks: SymlinkPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Discover versions under the [`DEFAULT_ROOT_DIR`] directory that sits next
    /// to the current executable.
    pub fn beside_executable() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(dir.join(DEFAULT_ROOT_DIR)))
    }

    /// Set the collision policy.
    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    /// Set the symlink policy.
    pub fn with_symlinks(mut self, symlinks: SymlinkPolicy) -> Self {
        self.symlinks = symlinks;
        self
    }

    /// Set the nesting limit below each version root.
    ///
    /// The limit only applies under [`SymlinkPolicy::Follow`], where a link
    /// back up the tree would otherwise recurse forever.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The discovery root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The collision policy.
    pub fn collision(&self) -> CollisionPolicy {
        self.collision
    }

    /// The symlink policy.
    pub fn symlinks(&self) -> SymlinkPolicy {
        self.symlinks
    }

    /// The nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
