//! # verso-std
//!
//! Discovery and routing for the Verso versioned method dispatcher.
//!
//! This crate provides:
//! - **Discovery**: [`Discovery`] walks a per-version directory tree
//! - **Routing table**: [`ApiTable`] and its per-version [`MethodMap`]
//! - **Configuration**: [`DiscoveryConfig`] with collision and symlink policies
//! - **Loaders**: [`Catalog`] binds method files to registered implementations
//! - **Instrumentation**: [`Traced`]
//!
//! [`Discovery`]: discovery::Discovery
//! [`ApiTable`]: table::ApiTable
//! [`MethodMap`]: table::MethodMap
//! [`DiscoveryConfig`]: config::DiscoveryConfig
//! [`Catalog`]: loader::Catalog
//! [`Traced`]: instrument::Traced

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use verso_core;

// Modules
pub mod config;
pub mod discovery;
pub mod instrument;
pub mod loader;
pub mod table;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
