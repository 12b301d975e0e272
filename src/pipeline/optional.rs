//! Zero-or-one container returned by reductions without an identity.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// The result of aggregating a possibly-empty pipeline.
///
/// Unlike `Option`, the only way to read the value is [`Optional::get`],
/// which treats an empty container as a contract violation and reports
/// [`Error::EmptyOptional`] instead of producing a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// An optional holding `value`.
    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    /// An optional holding nothing.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Return the contained value.
    ///
    /// Fails with [`Error::EmptyOptional`] when nothing is present.
    pub fn get(self) -> Result<T> {
        self.0.ok_or(Error::EmptyOptional)
    }

    /// Borrow the contained value, if any.
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}
