//! Loaders that turn discovered files into methods.
//!
//! Any `Fn(&MethodFile) -> Result<BoxMethod, LoadError>` is a loader already.
//! [`Catalog`] is the stock one: it binds files to implementations registered
//! in code, by symbol.

mod catalog;
mod descriptor;
#[cfg(feature = "inventory")]
mod registration;

pub use catalog::{Catalog, CatalogBuilder};
pub use descriptor::entry_symbol;
#[cfg(feature = "inventory")]
pub use registration::MethodRegistration;
