//! Memoization of self-recursive computations.
//!
//! The wrapped function receives a [`Recur`] handle and routes every
//! recursive self-call through it, so all calls share one cache instance and
//! each distinct argument tuple is computed at most once regardless of call
//! depth. Naive Fibonacci wrapped this way costs one computation per index.

use crate::error::KeyEncodingError;
use crate::key::{Canonical, Key};
use log::trace;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Handle passed to the wrapped function for recursive self-calls.
pub struct Recur<'a, A, R> {
    cache: &'a mut HashMap<Key, R>,
    compute: &'a dyn Fn(&A, &mut Recur<'_, A, R>) -> Result<R, KeyEncodingError>,
}

impl<A, R> Recur<'_, A, R>
where
    A: Canonical,
    R: Clone,
{
    /// Look up `args` in the shared cache, computing through the wrapped
    /// function on a miss. Recursive calls made by the computation go through
    /// the same cache.
    pub fn call(&mut self, args: &A) -> Result<R, KeyEncodingError> {
        let key = args.canonical_key()?;
        if let Some(value) = self.cache.get(&key) {
            trace!("hit for key {}", key);
            return Ok(value.clone());
        }
        let compute = self.compute;
        let value = compute(
            args,
            &mut Recur {
                cache: &mut *self.cache,
                compute,
            },
        )?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }
}

/// Memoizes a recursive computation over argument tuples of type `A`.
pub struct RecMemoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A, &mut Recur<'_, A, R>) -> Result<R, KeyEncodingError>,
{
    cache: HashMap<Key, R>,
    compute: F,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> RecMemoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A, &mut Recur<'_, A, R>) -> Result<R, KeyEncodingError>,
{
    /// Wrap `compute` with a fresh, empty cache.
    pub fn new(compute: F) -> Self {
        Self {
            cache: HashMap::new(),
            compute,
            _args: PhantomData,
        }
    }

    /// Return the cached result for `args`, computing it on a miss.
    ///
    /// Entries produced by recursive self-calls stay in the cache, so later
    /// top-level calls reuse them.
    pub fn call(&mut self, args: &A) -> Result<R, KeyEncodingError> {
        let mut recur = Recur {
            cache: &mut self.cache,
            compute: &self.compute,
        };
        recur.call(args)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
