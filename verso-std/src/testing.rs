//! Testing utilities for Verso.
//!
//! # Features
//!
//! - [`RecordingMethod`]: A method that records every input it receives
//! - [`CountingMethod`]: A method that counts invocations
//! - [`KeyLoader`]: A loader binding every file to a method that returns its key

use std::{
    future::{Future, ready},
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};
use verso_core::{BoxMethod, LoadError, Method, MethodFile, MethodLoader, boxed};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Recording Method
// ============================================================================

/// A method that records its inputs and answers with a fixed output.
///
/// Clones share the same record, so a clone can be registered while the
/// original is kept for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingMethod::new("ok");
/// let catalog = CatalogBuilder::new().register("ping", recorder.clone()).build();
///
/// // Discover and call...
/// table.dispatch("v1", "ping", 7).await?;
///
/// assert_eq!(recorder.inputs(), [7]);
/// ```
pub struct RecordingMethod<In, Out> {
    inputs: Arc<Mutex<Vec<In>>>,
    output: Out,
}

impl<In, Out> RecordingMethod<In, Out> {
    /// Create a recorder that returns `output` for every call.
    pub fn new(output: Out) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<In>
    where
        In: Clone,
    {
        lock(&self.inputs).clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        lock(&self.inputs).len()
    }

    /// Clear all recorded inputs.
    pub fn clear(&self) {
        lock(&self.inputs).clear();
    }
}

impl<In, Out: Clone> Clone for RecordingMethod<In, Out> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
        }
    }
}

impl<In, Out> Method<In> for RecordingMethod<In, Out>
where
    In: Send + 'static,
    Out: Clone + Send + Sync + 'static,
{
    type Output = Out;

    async fn call(&self, input: In) -> Self::Output {
        lock(&self.inputs).push(input);
        self.output.clone()
    }
}

// ============================================================================
// Counting Method
// ============================================================================

/// A method that counts invocations and returns `()`.
#[derive(Clone, Default)]
pub struct CountingMethod {
    count: Arc<AtomicUsize>,
}

impl CountingMethod {
    /// Create a new counting method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<In: Send + 'static> Method<In> for CountingMethod {
    type Output = ();

    async fn call(&self, _input: In) -> Self::Output {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Key Loader
// ============================================================================

/// A loader that accepts every file.
///
/// Each loaded method ignores its input and returns the key it was
/// discovered under. The loader remembers which files it was asked for.
#[derive(Clone, Default)]
pub struct KeyLoader {
    loaded: Arc<Mutex<Vec<MethodFile>>>,
}

impl KeyLoader {
    /// Create a new key loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files loaded so far, in load order.
    pub fn loaded(&self) -> Vec<MethodFile> {
        lock(&self.loaded).clone()
    }
}

impl<In: Send + 'static> MethodLoader<In, String> for KeyLoader {
    fn load<'a>(
        &'a self,
        file: &'a MethodFile,
    ) -> impl Future<Output = Result<BoxMethod<In, String>, LoadError>> + Send + 'a {
        lock(&self.loaded).push(file.clone());
        let key = file.key().to_string();
        ready(Ok(boxed(move |_: In| ready(key.clone()))))
    }
}
