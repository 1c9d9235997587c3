//! Explicit registry of method implementations.

use super::descriptor::read_symbol;
use std::{collections::HashMap, future::Future};
use verso_core::{BoxMethod, LoadError, Method, MethodFile, MethodLoader, boxed};

/// A set of method implementations addressed by entry symbol.
///
/// As a [`MethodLoader`], a catalog reads each discovered file's descriptor
/// and hands out the implementation registered under the symbol it names.
///
/// # Example
///
/// ```rust,ignore
/// let catalog = CatalogBuilder::new()
///     .register("users.create", create_user)
///     .register("ping", |_: Request| async { Response::Pong })
///     .build();
///
/// let table = ApiTable::discover(DiscoveryConfig::new("api"), catalog).await?;
/// ```
pub struct Catalog<In, Out> {
    symbols: HashMap<String, BoxMethod<In, Out>>,
}

impl<In, Out> Catalog<In, Out> {
    /// Look up an implementation by symbol.
    pub fn get(&self, symbol: &str) -> Option<&BoxMethod<In, Out>> {
        self.symbols.get(symbol)
    }

    /// Registered symbols, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Get the number of registered implementations.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<In, Out> MethodLoader<In, Out> for Catalog<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    fn load<'a>(
        &'a self,
        file: &'a MethodFile,
    ) -> impl Future<Output = Result<BoxMethod<In, Out>, LoadError>> + Send + 'a {
        async move {
            let symbol = read_symbol(file).await?;
            match self.symbols.get(&symbol) {
                Some(method) => Ok(method.clone()),
                None => Err(LoadError::UnknownSymbol {
                    symbol,
                    path: file.path().to_path_buf(),
                }),
            }
        }
    }
}

impl<In, Out> std::fmt::Debug for Catalog<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.symbols.keys()).finish()
    }
}

/// Builder for constructing a [`Catalog`].
///
/// Registering a symbol twice keeps the later implementation.
pub struct CatalogBuilder<In, Out> {
    symbols: HashMap<String, BoxMethod<In, Out>>,
}

impl<In, Out> CatalogBuilder<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Register an implementation under `symbol`.
    pub fn register<M>(mut self, symbol: impl Into<String>, method: M) -> Self
    where
        M: Method<In, Output = Out>,
    {
        self.register_mut(symbol, method);
        self
    }

    /// Register an implementation under `symbol` (mutable version).
    pub fn register_mut<M>(&mut self, symbol: impl Into<String>, method: M)
    where
        M: Method<In, Output = Out>,
    {
        self.register_boxed_mut(symbol, boxed(method));
    }

    /// Register an already erased implementation.
    pub fn register_boxed(
        mut self,
        symbol: impl Into<String>,
        method: BoxMethod<In, Out>,
    ) -> Self {
        self.register_boxed_mut(symbol, method);
        self
    }

    /// Register an already erased implementation (mutable version).
    pub fn register_boxed_mut(&mut self, symbol: impl Into<String>, method: BoxMethod<In, Out>) {
        self.symbols.insert(symbol.into(), method);
    }

    /// Get the number of registered implementations.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Build the catalog.
    pub fn build(self) -> Catalog<In, Out> {
        Catalog {
            symbols: self.symbols,
        }
    }
}

impl<In, Out> Default for CatalogBuilder<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
