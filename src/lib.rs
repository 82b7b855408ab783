//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_bag::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Accumulating independent failures
//!
//! ```
//! use error_bag::{errorf, ErrorBag};
//!
//! let bag = ErrorBag::new();
//! bag.add(std::io::Error::other("disk full"));
//! errorf!(bag, "record {} rejected", 7);
//!
//! assert_eq!(bag.len(), 2);
//! assert_eq!(bag.as_error().to_string(), "encountered 2 errors");
//!
//! let texts: Vec<String> = bag.errors().iter().map(|e| e.to_string()).collect();
//! assert_eq!(texts, ["disk full", "record 7 rejected"]);
//! ```
//!
//! ## Guaranteed cleanup-error capture
//!
//! ```
//! use error_bag::{AggregateError, ErrorBag};
//!
//! fn shutdown() -> Result<(), AggregateError> {
//!     let bag = ErrorBag::new();
//!     bag.defer(|| Err(std::io::Error::other("flush failed")));
//!     bag.defer(|| Ok::<(), std::io::Error>(()));
//!     bag.finish()
//! }
//!
//! let err = shutdown().unwrap_err();
//! assert_eq!(err.to_string(), "flush failed");
//! ```
//!
//! ## Flattening nested collectors
//!
//! ```
//! use error_bag::ErrorBag;
//!
//! let inner = ErrorBag::new();
//! inner.add(std::io::Error::other("a"));
//! inner.add(std::io::Error::other("b"));
//!
//! let outer = ErrorBag::new();
//! outer.add(std::io::Error::other("c")).add(&inner);
//!
//! // "c", "a", "b" -- the inner bag's errors, never the bag itself
//! assert_eq!(outer.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Error accumulation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for collector capabilities and conversions
pub mod traits;
/// The collector and its supporting types
pub mod types;

pub use traits::*;
pub use types::{
    as_error_bag, visit, AggregateError, BagError, ErrorBag, ErrorFn, ErrorVec, Extra,
    MessageError,
};
