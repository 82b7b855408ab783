use core::fmt::{self, Debug};

use crate::traits::IntoBagError;
use crate::types::alloc_type::Box;
use crate::types::{BagError, ErrorFn};

/// One item of a variadic-style extras sequence: an error value or a
/// zero-argument fallible callback.
///
/// Extras appear in [`ErrorBag::collect`](crate::ErrorBag::collect),
/// [`add_with`](crate::ErrorBag::add_with), [`extend`](crate::ErrorBag::extend)
/// and [`finish_with`](crate::ErrorBag::finish_with). Error items go through
/// the identity-aware insertion path; callback items are invoked immediately
/// at the fold point and their failures inserted. Only these two shapes
/// exist, so passing something that is neither cannot be expressed.
///
/// # Examples
///
/// ```
/// use error_bag::{ErrorBag, Extra};
///
/// let bag = ErrorBag::new();
/// bag.extend([
///     Extra::from(std::io::Error::other("read failed")),
///     Extra::func(|| Err(std::io::Error::other("close failed"))),
/// ]);
/// assert_eq!(bag.len(), 2);
/// ```
pub enum Extra {
    /// An error value, stored through the identity-aware insertion path.
    Error(BagError),
    /// A callback invoked at the fold point; an `Err` result is stored.
    Func(ErrorFn),
}

impl Extra {
    /// Wraps an error value.
    #[inline]
    pub fn error<E: IntoBagError>(err: E) -> Self {
        Self::Error(err.into_bag_error())
    }

    /// Wraps a fallible callback, normalizing its failure into shared form.
    #[inline]
    pub fn func<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + 'static,
        E: IntoBagError,
    {
        Self::Func(into_error_fn(f))
    }
}

impl<E: IntoBagError> From<E> for Extra {
    #[inline]
    fn from(err: E) -> Self {
        Self::error(err)
    }
}

impl Debug for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

pub(crate) fn into_error_fn<F, E>(f: F) -> ErrorFn
where
    F: FnOnce() -> Result<(), E> + 'static,
    E: IntoBagError,
{
    Box::new(move || f().err().map(IntoBagError::into_bag_error))
}
