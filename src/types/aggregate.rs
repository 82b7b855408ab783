use core::fmt::{self, Debug, Display};

use crate::traits::BagSource;
use crate::types::ErrorBag;

/// A collector exposed through the standard error interface.
///
/// `AggregateError` is a view, not a copy: it holds a handle to the same
/// underlying storage as the [`ErrorBag`] that produced it, so a later
/// attempt to insert it back into that bag is recognized and discarded by
/// the identity rules.
///
/// The [`Display`] rendering is the collector's combined form: an empty bag
/// renders as an empty string, a single error renders verbatim, and more
/// than one renders as `encountered {N} errors`. Use
/// [`errors`](ErrorBag::errors), [`sorted`](ErrorBag::sorted) or
/// [`visit`](ErrorBag::visit) for the individual messages.
///
/// # Examples
///
/// ```
/// use error_bag::ErrorBag;
///
/// let bag = ErrorBag::new();
/// bag.add(std::io::Error::other("boom"));
///
/// let err: Box<dyn std::error::Error> = Box::new(bag.as_error());
/// assert_eq!(err.to_string(), "boom");
/// ```
#[derive(Clone)]
pub struct AggregateError {
    bag: ErrorBag,
}

impl AggregateError {
    pub(crate) fn new(bag: ErrorBag) -> Self {
        Self { bag }
    }

    /// Returns the underlying collector handle.
    #[must_use]
    #[inline]
    pub fn bag(&self) -> &ErrorBag {
        &self.bag
    }

    /// Number of collected errors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.bag.len()
    }

    /// True when no errors are collected.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.bag.errors();
        match errors.len() {
            0 => Ok(()),
            1 => Display::fmt(&errors[0], f),
            n => write!(f, "encountered {n} errors"),
        }
    }
}

impl Debug for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AggregateError").field(&self.bag).finish()
    }
}

impl core::error::Error for AggregateError {}

impl BagSource for AggregateError {
    #[inline]
    fn error_bag(&self) -> &ErrorBag {
        &self.bag
    }
}
