//! # Method Layer
//!
//! A method is the opaque callable bound to a method key inside a version.
//! The dispatcher never inspects what a method does; it only hands the input
//! over and hands the output back.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Method`] uses a native `async fn` style signature for zero-cost static
//! dispatch. Routing tables store methods behind the object-safe
//! [`DynMethod`], usually as a [`BoxMethod`].
//!
//! # Input and output shapes
//!
//! A method takes exactly one input value. Several arguments are passed as a
//! tuple; heterogeneous APIs use an envelope enum shared by every method of a
//! table. A fallible method simply has `Output = Result<T, E>`.

use std::{future::Future, pin::Pin, sync::Arc};

/// A boxed future returned by a dynamically dispatched method.
pub type MethodFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A shared, type-erased method as stored in a routing table.
pub type BoxMethod<In, Out> = Arc<dyn DynMethod<In, Out>>;

/// An invocable implementation registered under a method key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with input of type `{In}`",
    label = "missing `Method<{In}>` implementation",
    note = "Methods must implement `call` for the input type `{In}`, or be an async closure `Fn({In}) -> Fut`."
)]
pub trait Method<In>: Send + Sync + 'static {
    /// The value produced by the method, returned to the caller unchanged.
    type Output: Send + 'static;

    /// Invokes the method.
    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send;
}

// Blanket impl for closures
impl<F, In, Out, Fut> Method<In> for F
where
    Out: Send + 'static,
    F: Fn(In) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send,
{
    type Output = Out;

    fn call(&self, input: In) -> impl Future<Output = Self::Output> + Send {
        (self)(input)
    }
}

/// Dynamic object-safe version of [`Method`].
pub trait DynMethod<In, Out>: Send + Sync + 'static {
    /// Invokes the method (dynamic dispatch version).
    fn call_dyn(&self, input: In) -> MethodFuture<'_, Out>;
}

// Blanket implementation: any Method is a DynMethod.
impl<In, M> DynMethod<In, M::Output> for M
where
    In: Send + 'static,
    M: Method<In>,
{
    fn call_dyn(&self, input: In) -> MethodFuture<'_, M::Output> {
        Box::pin(self.call(input))
    }
}

/// Erase a method into a [`BoxMethod`].
pub fn boxed<In, M>(method: M) -> BoxMethod<In, M::Output>
where
    In: Send + 'static,
    M: Method<In>,
{
    Arc::new(method)
}
