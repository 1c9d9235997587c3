//! # verso - Versioned Method Dispatcher
//!
//! `verso` builds a routing table from a directory tree where every immediate
//! subdirectory of the root is an API version and every file below it is a
//! method. Calls are routed by `(version, method key)`; the key is the file's
//! path below the version root, dash-joined, with the extension stripped.
//!
//! ```text
//! api/v1/users/create.js   ->   call("v1", "users-create", input)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verso::prelude::*;
//!
//! let catalog = CatalogBuilder::new()
//!     .register("users.create", |req: Request| async move { create(req).await })
//!     .build();
//!
//! let table = ApiTable::discover(DiscoveryConfig::new("api"), catalog).await?;
//!
//! match table.call("v1", "users-create", request) {
//!     Ok(pending) => respond(pending.await),
//!     Err(CallError::VersionNotSupported { .. }) => not_found(),
//!     Err(CallError::MethodNotFound { .. }) => not_found(),
//! }
//! ```
//!
//! ## Loaders
//!
//! Files are turned into methods by a [`MethodLoader`]. [`Catalog`] reads
//! each file as a descriptor naming a registered implementation; any
//! `Fn(&MethodFile) -> Result<BoxMethod<In, Out>, LoadError>` works as well.
//!
//! ## Features
//!
//! - `tracing` (default): discovery events through `tracing`, and spans for
//!   [`Traced`] methods
//! - `inventory`: link-time registration with `export_method!`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use verso_core::{
    // Errors
    BoxError,
    BuildError,
    CallError,
    LoadError,
    VersoError,
    // Keys
    MethodKey,
    SEPARATOR,
    file_segment,
    // Loading
    MethodFile,
    MethodLoader,
    // Methods
    BoxMethod,
    DynMethod,
    Method,
    MethodFuture,
    boxed,
    // Router traits
    RouteResult,
    Router,
};

pub use verso_std::{
    config::{
        CollisionPolicy, DEFAULT_MAX_DEPTH, DEFAULT_ROOT_DIR, DiscoveryConfig, SymlinkPolicy,
    },
    discovery::Discovery,
    instrument::Traced,
    loader::{Catalog, CatalogBuilder, entry_symbol},
    table::{ApiTable, MethodEntry, MethodMap, MethodMapBuilder},
};

#[cfg(feature = "inventory")]
pub use verso_std::{export_method, inventory, loader::MethodRegistration};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use verso_std::testing::*;
}

/// Prelude module - common imports for Verso.
///
/// # Usage
///
/// ```rust,ignore
/// use verso::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Table
        ApiTable,
        // Errors
        BoxError,
        BuildError,
        CallError,
        // Loading
        Catalog,
        CatalogBuilder,
        // Configuration
        CollisionPolicy,
        DiscoveryConfig,
        LoadError,
        // Core traits
        Method,
        MethodFile,
        MethodLoader,
        Router,
        SymlinkPolicy,
        boxed,
    };
}
