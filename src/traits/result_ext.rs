//! Extension trait for draining `Result` errors into a collector.
//!
//! # Examples
//!
//! ```
//! use error_bag::{ErrorBag, ResultExt};
//!
//! let bag = ErrorBag::new();
//! let values: Vec<u32> = ["1", "x", "3"]
//!     .iter()
//!     .filter_map(|s| s.parse::<u32>().stash_in(&bag))
//!     .collect();
//!
//! assert_eq!(values, [1, 3]);
//! assert_eq!(bag.len(), 1);
//! ```

use crate::traits::IntoBagError;
use crate::types::ErrorBag;

/// Extension trait for storing the `Err` side of a `Result` in an
/// [`ErrorBag`] while keeping the `Ok` side.
///
/// This keeps accumulation loops flat: no `match`, no early return, every
/// failure captured.
pub trait ResultExt<T> {
    /// Stores the error in `bag` and returns the success value, if any.
    fn stash_in(self, bag: &ErrorBag) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: IntoBagError,
{
    #[inline]
    fn stash_in(self, bag: &ErrorBag) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                bag.add(err);
                None
            }
        }
    }
}
