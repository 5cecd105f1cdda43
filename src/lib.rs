pub mod error;
pub mod key;
pub mod memoizer;
pub mod recursive;
pub mod shared;
