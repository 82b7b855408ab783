use crate::types::ErrorBag;

/// Capability check for "this value exposes an underlying [`ErrorBag`]".
///
/// The collector recognizes other collectors structurally, not by nominal
/// type: anything that can surface its bag through this one accessor
/// participates in the identity and flattening rules of
/// [`ErrorBag::merge`](crate::ErrorBag::merge). Implement it on composite
/// types that carry a bag so that merging them, or merging their own bag
/// back into itself through them, behaves like merging the bag directly.
///
/// # Examples
///
/// ```
/// use error_bag::{BagSource, ErrorBag};
///
/// struct Session {
///     bag: ErrorBag,
/// }
///
/// impl BagSource for Session {
///     fn error_bag(&self) -> &ErrorBag {
///         &self.bag
///     }
/// }
///
/// let session = Session { bag: ErrorBag::new() };
/// session.bag.add(std::io::Error::other("boom"));
///
/// let parent = ErrorBag::new();
/// parent.merge(&session);
/// assert_eq!(parent.len(), 1);
/// ```
pub trait BagSource {
    /// Returns the underlying collector.
    fn error_bag(&self) -> &ErrorBag;
}

impl BagSource for ErrorBag {
    #[inline]
    fn error_bag(&self) -> &ErrorBag {
        self
    }
}
