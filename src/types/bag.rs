//! The collector core: identity-aware accumulation, wrapping, and the
//! deferred-error protocol.

use core::cell::RefCell;
use core::error::Error;
use core::fmt::{self, Debug};

use crate::traits::{BagSource, ErrorWrapper, IntoBagError};
use crate::types::alloc_type::{Rc, ToString};
use crate::types::extra::into_error_fn;
use crate::types::{AggregateError, BagError, ErrorFn, ErrorVec, Extra};

/// A collector for multiple errors, in a fluent style: mutators return the
/// collector so calls can be chained, and every clone of an `ErrorBag` is a
/// handle to the same underlying storage.
///
/// The bag takes extra care not to store itself as one of its own errors.
/// Any inserted value that structurally exposes a collector is either
/// discarded (same identity) or flattened into individual entries in their
/// original order (different identity). It cannot catch every case: an
/// opaque error that merely owns an aggregate internally is stored verbatim.
///
/// # Examples
///
/// ```
/// use error_bag::ErrorBag;
///
/// let bag = ErrorBag::new();
/// bag.add(std::io::Error::other("read failed"))
///     .add(std::io::Error::other("write failed"));
///
/// let err = bag.error_or_nil().unwrap();
/// assert_eq!(err.to_string(), "encountered 2 errors");
/// ```
///
/// Cloning aliases, it does not copy:
///
/// ```
/// use error_bag::ErrorBag;
///
/// let bag = ErrorBag::new();
/// let alias = bag.clone();
/// alias.add(std::io::Error::other("boom"));
///
/// assert_eq!(bag.len(), 1);
/// assert!(bag.same(&alias));
/// ```
#[derive(Clone, Default)]
pub struct ErrorBag {
    inner: Rc<RefCell<BagCore>>,
}

#[derive(Default)]
struct BagCore {
    errors: ErrorVec<BagError>,
    wrapper: Option<Rc<dyn ErrorWrapper>>,
    defers: ErrorVec<ErrorFn>,
}

impl ErrorBag {
    /// Creates an empty collector.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collector that passes errors through `wrapper` on
    /// calls to [`wrap`](Self::wrap).
    #[must_use]
    pub fn with_wrapper<W>(wrapper: W) -> Self
    where
        W: ErrorWrapper + 'static,
    {
        let bag = Self::new();
        bag.set_wrapper(wrapper);
        bag
    }

    /// Builds a collector from a primary error plus a sequence of extras.
    ///
    /// A `None` primary means "no error occurred" and propagates as `None`:
    /// no container is allocated and the extras are dropped without being
    /// folded, so extra callbacks are not invoked. When the primary is
    /// itself a collector view, its own handle is returned rather than a
    /// fresh bag, so identity is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bag::{ErrorBag, Extra};
    /// use std::io::Error;
    ///
    /// assert!(ErrorBag::collect(None::<Error>, []).is_none());
    ///
    /// let bag = ErrorBag::collect(
    ///     Some(Error::other("open failed")),
    ///     [Extra::func(|| Err(Error::other("close failed")))],
    /// )
    /// .unwrap();
    /// assert_eq!(bag.len(), 2);
    /// ```
    pub fn collect<E, I>(primary: Option<E>, extras: I) -> Option<Self>
    where
        E: IntoBagError,
        I: IntoIterator<Item = Extra>,
    {
        let primary = primary?.into_bag_error();
        let bag = match as_error_bag(primary.as_ref()) {
            Some(existing) => existing,
            None => {
                let bag = Self::new();
                bag.insert(primary);
                bag
            }
        };
        bag.extend(extras);
        Some(bag)
    }

    /// True when `other` is a handle to this collector's storage.
    #[must_use]
    #[inline]
    pub fn same(&self, other: &ErrorBag) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of stored errors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.borrow().errors.len()
    }

    /// True when no errors are stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().errors.is_empty()
    }

    /// True when at least one error is stored.
    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Inserts `err` through the identity-aware path.
    ///
    /// Values that structurally expose a collector are never stored as
    /// opaque leaves: inserting this bag under any guise is a silent no-op,
    /// and inserting a different bag flattens its errors into this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bag::ErrorBag;
    ///
    /// let bag = ErrorBag::new();
    /// bag.add(std::io::Error::other("boom"));
    /// bag.add(&bag);
    /// bag.add(bag.as_error());
    ///
    /// assert_eq!(bag.len(), 1);
    /// ```
    pub fn add<E: IntoBagError>(&self, err: E) -> &Self {
        self.insert(err.into_bag_error());
        self
    }

    /// Inserts `err`, then folds `extras`: error items are inserted and
    /// callback items are invoked immediately, their failures inserted.
    pub fn add_with<E, I>(&self, err: E, extras: I) -> &Self
    where
        E: IntoBagError,
        I: IntoIterator<Item = Extra>,
    {
        self.insert(err.into_bag_error());
        self.extend(extras)
    }

    /// Folds a sequence of extras (see [`Extra`]).
    pub fn extend<I>(&self, extras: I) -> &Self
    where
        I: IntoIterator<Item = Extra>,
    {
        for extra in extras {
            match extra {
                Extra::Error(err) => self.insert(err),
                Extra::Func(f) => {
                    if let Some(err) = f() {
                        self.insert(err);
                    }
                }
            }
        }
        self
    }

    /// Folds every stored error of `other` into this collector, preserving
    /// order.
    ///
    /// Merging a collector into itself is a no-op; `other` is left untouched
    /// either way. Merge does not deduplicate: merging the same source twice
    /// stores its errors twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bag::ErrorBag;
    ///
    /// let source = ErrorBag::new();
    /// source.add(std::io::Error::other("boom"));
    ///
    /// let target = ErrorBag::new();
    /// target.merge(&source).merge(&source);
    ///
    /// assert_eq!(target.len(), 2);
    /// assert_eq!(source.len(), 1);
    /// ```
    pub fn merge<S>(&self, other: &S) -> &Self
    where
        S: BagSource + ?Sized,
    {
        let other = other.error_bag();
        if self.same(other) {
            return self;
        }
        let snapshot: ErrorVec<BagError> = other.inner.borrow().errors.clone();
        for err in snapshot {
            self.insert(err);
        }
        self
    }

    fn insert(&self, err: BagError) {
        if let Some(other) = as_error_bag(err.as_ref()) {
            self.merge(&other);
            return;
        }
        let mut inner = self.inner.borrow_mut();
        inner.errors.push(err);
        #[cfg(feature = "tracing")]
        tracing::trace!(total = inner.errors.len(), "stored error");
    }

    /// Installs `wrapper`, replacing any previous one.
    pub fn set_wrapper<W>(&self, wrapper: W) -> &Self
    where
        W: ErrorWrapper + 'static,
    {
        self.inner.borrow_mut().wrapper = Some(Rc::new(wrapper));
        self
    }

    /// Removes the installed wrapper; [`wrap`](Self::wrap) then behaves
    /// exactly like [`add`](Self::add).
    pub fn clear_wrapper(&self) -> &Self {
        self.inner.borrow_mut().wrapper = None;
        self
    }

    /// Passes `err` through the installed wrapper, then inserts the result
    /// through the standard identity-aware path.
    ///
    /// Without a wrapper this is equivalent to [`add`](Self::add). When
    /// `err` is itself a collector view, its errors are wrapped
    /// individually (a sub-collector is never tagged as one opaque blob),
    /// and wrapping a collector into itself remains a no-op. A transform
    /// that returns another collector, or this one, is still subject to the
    /// identity and flattening rules.
    pub fn wrap<E: IntoBagError>(&self, err: E) -> &Self {
        self.wrap_shared(err.into_bag_error());
        self
    }

    fn wrap_shared(&self, err: BagError) {
        // Clone the wrapper handle out so user code runs with no borrow
        // held; a transform may legitimately touch this very collector.
        let wrapper = self.inner.borrow().wrapper.clone();
        let Some(wrapper) = wrapper else {
            self.insert(err);
            return;
        };

        if let Some(other) = as_error_bag(err.as_ref()) {
            if !self.same(&other) {
                let snapshot: ErrorVec<BagError> = other.inner.borrow().errors.clone();
                for err in snapshot {
                    self.wrap_shared(err);
                }
            }
            return;
        }

        self.insert(wrapper.wrap_error(err));
    }

    /// Registers a callback to run once, at [`finish`](Self::finish).
    ///
    /// Registration never invokes `f`; its failure, if any, surfaces in the
    /// collector at the finalize point. Registration order is preserved.
    pub fn defer<F, E>(&self, f: F) -> &Self
    where
        F: FnOnce() -> Result<(), E> + 'static,
        E: IntoBagError,
    {
        self.inner.borrow_mut().defers.push(into_error_fn(f));
        self
    }

    /// Finalizes the collector: runs every deferred callback and reports.
    ///
    /// Equivalent to [`finish_with`](Self::finish_with) with no extras.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bag::ErrorBag;
    ///
    /// let bag = ErrorBag::new();
    /// bag.defer(|| Err(std::io::Error::other("close failed")));
    ///
    /// let err = bag.finish().unwrap_err();
    /// assert_eq!(err.to_string(), "close failed");
    /// ```
    pub fn finish(&self) -> Result<(), AggregateError> {
        self.finish_with([])
    }

    /// Folds `extras`, then invokes every deferred callback in registration
    /// order, each exactly once, regardless of earlier failures. Each
    /// failure is stored, and [`error_or_nil`](Self::error_or_nil) is
    /// returned as a `Result`.
    ///
    /// The pending list is drained: a second `finish` reports the stored
    /// errors again but re-runs nothing.
    pub fn finish_with<I>(&self, extras: I) -> Result<(), AggregateError>
    where
        I: IntoIterator<Item = Extra>,
    {
        self.extend(extras);
        let defers = core::mem::take(&mut self.inner.borrow_mut().defers);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            defers = defers.len(),
            errors = self.len(),
            "finalizing collector"
        );
        for f in defers {
            if let Some(err) = f() {
                self.insert(err);
            }
        }
        match self.error_or_nil() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// The stored errors, in insertion order.
    ///
    /// This is a read view sharing the stored values; mutating the returned
    /// collection does not affect the collector.
    #[must_use]
    pub fn errors(&self) -> ErrorVec<BagError> {
        self.inner.borrow().errors.clone()
    }

    /// The stored errors ordered by their rendered text.
    ///
    /// The sort is stable: errors with identical text keep their insertion
    /// order.
    #[must_use]
    pub fn sorted(&self) -> ErrorVec<BagError> {
        let mut errors = self.errors();
        errors.sort_by_cached_key(|err| err.to_string());
        errors
    }

    /// Invokes `visitor` once per stored error, in insertion order.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(&(dyn Error + 'static)),
    {
        let snapshot = self.errors();
        for err in &snapshot {
            visitor(err.as_ref());
        }
    }

    /// This collector as an error value.
    ///
    /// The view shares identity with the collector, so feeding it back into
    /// the same bag is recognized and discarded.
    #[must_use]
    pub fn as_error(&self) -> AggregateError {
        AggregateError::new(self.clone())
    }

    /// `Some(view)` when any errors are stored, `None` otherwise.
    #[must_use]
    pub fn error_or_nil(&self) -> Option<AggregateError> {
        if self.is_empty() {
            None
        } else {
            Some(self.as_error())
        }
    }
}

impl Debug for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ErrorBag")
            .field("errors", &inner.errors)
            .field("defers", &inner.defers.len())
            .finish()
    }
}

/// Reduces an opaque error to its underlying collector, when it is one.
///
/// Only the collector's own error view ([`AggregateError`]) is recognizable
/// inside a `dyn Error`; composite carrier types participate through
/// [`BagSource`] instead.
#[must_use]
pub fn as_error_bag(err: &(dyn Error + 'static)) -> Option<ErrorBag> {
    err.downcast_ref::<AggregateError>()
        .map(|agg| agg.bag().clone())
}

/// Invokes `visitor` for each error held by `err`, when `err` is a collector
/// view; otherwise does nothing.
///
/// This lets generic code traverse an error it received without knowing
/// whether it holds a plain error or an aggregate.
///
/// # Examples
///
/// ```
/// use error_bag::{visit, ErrorBag};
///
/// let bag = ErrorBag::new();
/// bag.add(std::io::Error::other("boom"));
///
/// let mut seen = Vec::new();
/// visit(&bag.as_error(), |err| seen.push(err.to_string()));
/// assert_eq!(seen, ["boom"]);
///
/// visit(&std::io::Error::other("plain"), |err| seen.push(err.to_string()));
/// assert_eq!(seen.len(), 1);
/// ```
pub fn visit<F>(err: &(dyn Error + 'static), visitor: F)
where
    F: FnMut(&(dyn Error + 'static)),
{
    if let Some(bag) = as_error_bag(err) {
        bag.visit(visitor);
    }
}
