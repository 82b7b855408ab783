use crate::types::alloc_type::Rc;
use crate::types::{BagError, ErrorBag};

/// Conversion into the shared error representation stored by
/// [`ErrorBag`](crate::ErrorBag).
///
/// Blanket-implemented for every `core::error::Error + 'static` type, and
/// for [`ErrorBag`] itself: a bag converts through its aggregate view so
/// the identity-aware insertion rules can recognize it on the way back in.
/// `ErrorBag` deliberately does not implement `Error`; that is what keeps
/// the blanket impl coherent.
pub trait IntoBagError {
    /// Converts `self` into a shared stored error.
    fn into_bag_error(self) -> BagError;
}

impl<E> IntoBagError for E
where
    E: core::error::Error + 'static,
{
    #[inline]
    fn into_bag_error(self) -> BagError {
        Rc::new(self)
    }
}

impl IntoBagError for ErrorBag {
    #[inline]
    fn into_bag_error(self) -> BagError {
        Rc::new(self.as_error())
    }
}

impl IntoBagError for &ErrorBag {
    #[inline]
    fn into_bag_error(self) -> BagError {
        Rc::new(self.as_error())
    }
}
