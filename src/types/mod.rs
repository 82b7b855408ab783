//! The collector and its supporting types.
//!
//! [`ErrorBag`] is the central container; [`AggregateError`] is the same
//! container seen through the standard error interface; [`Extra`] is one item
//! of a variadic-style extras sequence.
//!
//! # Examples
//!
//! ```
//! use error_bag::ErrorBag;
//!
//! let bag = ErrorBag::new();
//! bag.add(std::io::Error::other("boom"));
//!
//! assert!(bag.has_errors());
//! assert_eq!(bag.as_error().to_string(), "boom");
//! ```
use smallvec::SmallVec;

pub mod aggregate;
pub mod alloc_type;
pub mod bag;
pub mod extra;
pub mod message_error;

pub use aggregate::AggregateError;
pub use bag::{as_error_bag, visit, ErrorBag};
pub use extra::Extra;
pub use message_error::MessageError;

use crate::types::alloc_type::{Box, Rc};

/// SmallVec-backed collection used for accumulating errors and callbacks.
///
/// Uses inline storage for one element to avoid heap allocations in the
/// common case where a collector holds a single error.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Shared handle to a stored error.
///
/// Stored errors are reference-counted so that [`ErrorBag::merge`] can copy
/// another collector's contents without consuming or mutating it.
pub type BagError = Rc<dyn core::error::Error + 'static>;

/// A zero-argument fallible callback in normalized form; `None` is success.
///
/// Produced by [`Extra::func`] and registered by
/// [`ErrorBag::defer`](crate::ErrorBag::defer).
pub type ErrorFn = Box<dyn FnOnce() -> Option<BagError>>;
