//! Thread-safe memoization for caches shared between callers.
//!
//! [`SharedMemoizer`] serializes the whole lookup-compute-insert sequence
//! under one mutex, making it a single critical section: concurrent callers
//! observe at most one computation per key (single-flight). The lock is held
//! for the full duration of the computation, so a long-running computation
//! blocks other callers until it finishes.

use crate::error::KeyEncodingError;
use crate::key::Canonical;
use crate::memoizer::Memoizer;
use std::sync::Mutex;

/// A [`Memoizer`] callable through `&self`, suitable for `static` position
/// behind `once_cell::sync::Lazy` with an `fn`-pointer computation.
pub struct SharedMemoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> R,
{
    inner: Mutex<Memoizer<A, R, F>>,
}

impl<A, R, F> SharedMemoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap `compute` with a fresh, empty cache.
    pub fn new(compute: F) -> Self {
        Self {
            inner: Mutex::new(Memoizer::new(compute)),
        }
    }

    /// Return the cached result for `args`, computing and storing it under
    /// the cache-wide lock if this argument tuple was never seen.
    pub fn call(&self, args: &A) -> Result<R, KeyEncodingError> {
        self.inner.lock().unwrap().call(args)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.inner.lock().unwrap().hits()
    }

    /// Number of calls that ran the computation.
    pub fn misses(&self) -> u64 {
        self.inner.lock().unwrap().misses()
    }
}
