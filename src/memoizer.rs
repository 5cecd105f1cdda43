//! Memoizing wrappers around pure computation functions.
//!
//! A wrapper owns one cache for its whole lifetime: each unique argument
//! tuple triggers the computation at most once, later calls return a clone of
//! the stored result. There is no eviction and no removal; a per-key entry
//! only ever goes from absent to present.

use crate::error::{KeyEncodingError, MemoError};
use crate::key::{Canonical, Key};
use log::{debug, trace};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Memoizes an infallible computation `F` over argument tuples of type `A`.
pub struct Memoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> R,
{
    cache: HashMap<Key, R>,
    compute: F,
    hits: u64,
    misses: u64,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoizer<A, R, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap `compute` with a fresh, empty cache.
    pub fn new(compute: F) -> Self {
        Self {
            cache: HashMap::new(),
            compute,
            hits: 0,
            misses: 0,
            _args: PhantomData,
        }
    }

    /// Return the cached result for `args`, computing and storing it first if
    /// this argument tuple was never seen.
    ///
    /// Fails only if `args` cannot be canonicalized; the failure is reported
    /// before the computation runs and the cache is left unchanged.
    pub fn call(&mut self, args: &A) -> Result<R, KeyEncodingError> {
        let key = args.canonical_key()?;
        if let Some(value) = self.cache.get(&key) {
            self.hits += 1;
            trace!("hit for key {}", key);
            return Ok(value.clone());
        }
        self.misses += 1;
        debug!("miss for key {}, computing", key);
        let value = (self.compute)(args);
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that ran the computation.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Memoizes a fallible computation. Successful results are cached exactly
/// like [`Memoizer`]; an `Err` is handed back to the caller untouched and
/// never stored, so an identical later call runs the computation again.
pub struct TryMemoizer<A, R, E, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    cache: HashMap<Key, R>,
    compute: F,
    hits: u64,
    misses: u64,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, E, F> TryMemoizer<A, R, E, F>
where
    A: Canonical,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    /// Wrap `compute` with a fresh, empty cache.
    pub fn new(compute: F) -> Self {
        Self {
            cache: HashMap::new(),
            compute,
            hits: 0,
            misses: 0,
            _args: PhantomData,
        }
    }

    /// Return the cached result for `args`, computing it on a miss.
    pub fn call(&mut self, args: &A) -> Result<R, MemoError<E>> {
        let key = args.canonical_key()?;
        if let Some(value) = self.cache.get(&key) {
            self.hits += 1;
            trace!("hit for key {}", key);
            return Ok(value.clone());
        }
        self.misses += 1;
        debug!("miss for key {}, computing", key);
        match (self.compute)(args) {
            Ok(value) => {
                self.cache.insert(key, value.clone());
                Ok(value)
            }
            Err(err) => {
                debug!("computation failed for key {}, not caching", key);
                Err(MemoError::Compute(err))
            }
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that ran the computation.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_call_is_served_from_the_cache() {
        let calls = Cell::new(0u32);
        let mut memo = Memoizer::new(|&(a, b): &(u64, u64)| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(memo.call(&(1, 2)), Ok(3));
        assert_eq!(memo.call(&(1, 2)), Ok(3));
        assert_eq!(calls.get(), 1);
        assert_eq!(memo.len(), 1);
        assert_eq!((memo.hits(), memo.misses()), (1, 1));
    }

    #[test]
    fn distinct_tuples_are_distinct_entries() {
        let mut concat = Memoizer::new(|(a, b): &(String, String)| format!("{}{}", a, b));
        let ab = concat.call(&("a".into(), "b".into())).unwrap();
        let ba = concat.call(&("b".into(), "a".into())).unwrap();
        assert_eq!(ab, "ab");
        assert_eq!(ba, "ba");
        assert_eq!(concat.len(), 2);
    }

    #[test]
    fn a_fresh_wrapper_starts_empty() {
        let memo = Memoizer::new(|&n: &u64| n);
        assert!(memo.is_empty());
        assert_eq!((memo.hits(), memo.misses()), (0, 0));
    }

    #[test]
    fn errors_are_not_cached() {
        let calls = Cell::new(0u32);
        let mut memo = TryMemoizer::new(|&n: &u32| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err("transient".to_string())
            } else {
                Ok(n * 2)
            }
        });
        assert_eq!(
            memo.call(&21),
            Err(MemoError::Compute("transient".to_string()))
        );
        assert!(memo.is_empty());
        assert_eq!(memo.call(&21), Ok(42));
        assert_eq!(calls.get(), 2);
        // third call hits the cache
        assert_eq!(memo.call(&21), Ok(42));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn unencodable_arguments_fail_before_computing() {
        let calls = Cell::new(0u32);
        let mut memo = Memoizer::new(|&x: &f64| {
            calls.set(calls.get() + 1);
            x * 2.0
        });
        assert_eq!(memo.call(&f64::NAN), Err(KeyEncodingError::NanFloat));
        assert_eq!(calls.get(), 0);
        assert!(memo.is_empty());
        assert_eq!(memo.call(&2.0), Ok(4.0));
    }
}
