//! Core traits for collector capabilities and conversions.
//!
//! This module defines the seams through which values participate in error
//! accumulation:
//!
//! - [`BagSource`]: structural "exposes its underlying collector" capability
//! - [`ErrorWrapper`]: pluggable transform applied by [`ErrorBag::wrap`](crate::ErrorBag::wrap)
//! - [`IntoBagError`]: conversion into the shared stored-error form
//! - [`ResultExt`]: `Result` ergonomics for accumulation

pub mod bag_source;
pub mod error_wrapper;
pub mod into_bag_error;
pub mod result_ext;

pub use bag_source::BagSource;
pub use error_wrapper::ErrorWrapper;
pub use into_bag_error::IntoBagError;
pub use result_ext::ResultExt;
