//! Typed failures of the memoization tables.

use thiserror::Error;

/// Raised when an argument tuple has no canonical key encoding.
///
/// Reported before the wrapped computation runs; the cache is left untouched,
/// so a later call with encodable arguments is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyEncodingError {
    /// NaN compares unequal to itself and therefore has no canonical identity.
    #[error("cannot encode NaN as a cache key")]
    NanFloat,
    /// The type opted out of canonicalization (live handles and the like).
    #[error("cannot encode a value of type `{0}` as a cache key")]
    Unsupported(&'static str),
}

/// Call-level error of a fallible memoized computation.
///
/// A `Compute` error carries the wrapped function's own error value. Failed
/// computations are never cached: an identical later call runs the
/// computation again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError<E> {
    #[error("cache key encoding failed: {0}")]
    Key(#[from] KeyEncodingError),
    #[error("memoized computation failed: {0}")]
    Compute(E),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_errors_convert_into_memo_errors() {
        let err: MemoError<String> = KeyEncodingError::NanFloat.into();
        assert_eq!(err, MemoError::Key(KeyEncodingError::NanFloat));
    }

    #[test]
    fn display_names_the_offending_type() {
        let err = KeyEncodingError::Unsupported("std::fs::File");
        assert_eq!(
            err.to_string(),
            "cannot encode a value of type `std::fs::File` as a cache key"
        );
    }
}
