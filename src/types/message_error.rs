use core::fmt::{self, Display};

use crate::types::alloc_type::String;

/// A plain formatted error message.
///
/// This is the leaf error produced by [`errorf!`](crate::errorf); it can
/// also be used directly wherever a message-only error is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageError(String);

impl MessageError {
    /// Creates a message error from any string-like value.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::error::Error for MessageError {}
