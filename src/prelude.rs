//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_bag::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`](crate::errorf)
//! - **Types**: [`ErrorBag`], [`AggregateError`], [`BagError`], [`Extra`]
//! - **Traits**: [`BagSource`], [`ErrorWrapper`], [`IntoBagError`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_bag::prelude::*;
//!
//! fn remove_all(paths: &[&str]) -> Result<(), AggregateError> {
//!     let bag = ErrorBag::new();
//!     for path in paths {
//!         std::fs::remove_file(path).stash_in(&bag);
//!     }
//!     bag.finish()
//! }
//! ```

// Macros
pub use crate::errorf;

// Core types
pub use crate::types::{AggregateError, BagError, ErrorBag, Extra};

// Traits
pub use crate::traits::{BagSource, ErrorWrapper, IntoBagError, ResultExt};
