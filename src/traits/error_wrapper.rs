use crate::types::BagError;

/// Pluggable transformation applied to errors entering a collector through
/// [`ErrorBag::wrap`](crate::ErrorBag::wrap).
///
/// An implementation receives the shared error and returns the value to
/// store; returning the input unchanged is a passthrough. Closures of type
/// `Fn(BagError) -> BagError` implement this trait automatically.
///
/// # Examples
///
/// ```
/// use error_bag::{BagError, ErrorBag};
/// use std::fmt;
/// use std::rc::Rc;
///
/// #[derive(Debug)]
/// struct Tagged(BagError);
///
/// impl fmt::Display for Tagged {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "query: {}", self.0)
///     }
/// }
///
/// impl std::error::Error for Tagged {}
///
/// let bag = ErrorBag::with_wrapper(|err: BagError| -> BagError {
///     if err.downcast_ref::<Tagged>().is_some() {
///         err
///     } else {
///         Rc::new(Tagged(err))
///     }
/// });
///
/// bag.wrap(std::io::Error::other("timeout"));
/// assert_eq!(bag.as_error().to_string(), "query: timeout");
/// ```
pub trait ErrorWrapper {
    /// Returns `err`, optionally wrapped in a different error value.
    fn wrap_error(&self, err: BagError) -> BagError;
}

impl<F> ErrorWrapper for F
where
    F: Fn(BagError) -> BagError,
{
    #[inline]
    fn wrap_error(&self, err: BagError) -> BagError {
        self(err)
    }
}
