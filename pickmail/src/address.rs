//! Address newtypes.
//!
//! [`EmailAddress`] is a raw address as it appears in the source file.
//! [`MaskedAddress`] is its display form. The two are kept apart on purpose:
//! a masked address has no `AsRef<str>` impl and no way back to an
//! [`EmailAddress`], so it can be printed and logged but never handed to
//! [`crate::write_addresses`].

use std::fmt;

use serde::Serialize;

/// Index of the first `@` in `value`, counted in Unicode scalar values.
pub(crate) fn local_part_len(value: &str) -> Option<usize> {
    value.chars().position(|ch| ch == '@')
}

/// One address taken from the first column of the source file.
///
/// No syntax validation happens here; the value is whatever the column held.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Wraps a raw address.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the address as written in the source file.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the local part in Unicode scalar values, i.e. the index of
    /// the first `@`. Returns `None` when the address has no `@`.
    pub fn local_part_len(&self) -> Option<usize> {
        local_part_len(&self.0)
    }

    /// Consumes the wrapper and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmailAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EmailAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Display-only form of an address produced by [`crate::EmailMaskPolicy`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MaskedAddress(String);

impl MaskedAddress {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the masked text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaskedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for MaskedAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
