//! Ergonomic macros for feeding a collector.
//!
//! - [`macro@crate::errorf`] - Formats an error message and stores it in an
//!   [`ErrorBag`](crate::ErrorBag), the in-place counterpart of building a
//!   [`MessageError`](crate::types::MessageError) by hand.
//!
//! # Examples
//!
//! ```
//! use error_bag::{errorf, ErrorBag};
//!
//! let bag = ErrorBag::new();
//! errorf!(bag, "row {}: malformed header", 12);
//!
//! assert_eq!(bag.as_error().to_string(), "row 12: malformed header");
//! ```

/// Formats an error message and adds it to a collector.
///
/// Shorthand for `bag.add(MessageError::new(format!(...)))`. Accepts the
/// same arguments as `format!` after the collector expression, and evaluates
/// to the collector reference so it can sit inside a fluent chain.
///
/// # Examples
///
/// ```
/// use error_bag::{errorf, ErrorBag};
///
/// let bag = ErrorBag::new();
/// errorf!(bag, "expected {} columns, found {}", 4, 7);
///
/// assert_eq!(bag.len(), 1);
/// ```
#[macro_export]
macro_rules! errorf {
    ($bag:expr, $($arg:tt)*) => {
        $bag.add($crate::types::MessageError::new(format!($($arg)*)))
    };
}
