//! Per-call instrumentation for methods.
//!
//! Dispatch itself emits no events on the call path. Wrap a method in
//! [`Traced`] when its invocations should run inside a `tracing` span.

use std::future::Future;
use verso_core::Method;

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// A method wrapper that runs every call inside a `method_call` span.
///
/// Without the `tracing` feature the wrapper forwards calls unchanged.
///
/// ```rust,ignore
/// let catalog = CatalogBuilder::new()
///     .register("users.create", Traced::new(create_user, "users.create"))
///     .build();
/// ```
pub struct Traced<M> {
    inner: M,
    name: &'static str,
}

impl<M> Traced<M> {
    /// Wrap `inner`, labelling its span with `name`.
    pub const fn new(inner: M, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner method.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Clone> Clone for Traced<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<In, M> Method<In> for Traced<M>
where
    In: Send,
    M: Method<In>,
{
    type Output = M::Output;

    #[cfg(feature = "tracing")]
    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send {
        let span = tracing::debug_span!("method_call", method = %self.name);
        self.inner.call(input).instrument(span)
    }

    #[cfg(not(feature = "tracing"))]
    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send {
        self.inner.call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verso_core::{BoxMethod, boxed};

    #[tokio::test]
    async fn test_traced_passthrough() {
        let traced = Traced::new(|n: u32| async move { n * 2 }, "double");
        assert_eq!(traced.name(), "double");
        assert_eq!(traced.call(21).await, 42);
    }

    #[tokio::test]
    async fn test_traced_boxed() {
        let method: BoxMethod<u32, u32> = boxed(Traced::new(|n: u32| async move { n + 1 }, "inc"));
        assert_eq!(method.call_dyn(1).await, 2);
    }
}
