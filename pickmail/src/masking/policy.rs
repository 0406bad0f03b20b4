//! The email display-masking rule.
//!
//! Let `mask_end` be the length of the local part (the index of the first
//! `@`, in Unicode scalar values):
//!
//! | Local part | Masked span | Example |
//! |------------|-------------|---------|
//! | 1 to 3 chars | two mask chars at positions 1-2 | `abc@x.com` → `a**@x.com` |
//! | 4 or more | `mask_end - 3` chars from position 2 | `bcda@y.com` → `bc*a@y.com` |
//! | empty or no `@` | whole value replaced by a placeholder | `oops` → `[REDACTED]` |
//!
//! The `@` and everything after it are never touched.

use std::borrow::Cow;

use super::MaskSpan;
use crate::{address::local_part_len, EmailAddress, MaskedAddress};

/// Default symbol used to mask characters.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Default placeholder shown for values that cannot be masked as an address.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Local parts shorter than this get the fixed two-character mask.
const SHORT_LOCAL_PART: usize = 4;
const SHORT_MASK_WIDTH: usize = 2;
const LONG_MASK_START: usize = 2;

/// Masks email addresses for display.
#[derive(Clone, Debug)]
pub struct EmailMaskPolicy {
    mask_char: char,
    // `Cow` so callers can provide borrowed or owned placeholders.
    placeholder: Cow<'static, str>,
}

impl EmailMaskPolicy {
    /// Constructs the policy with [`DEFAULT_MASK_CHAR`] and [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Uses a custom placeholder for values without a local part.
    #[must_use]
    pub fn with_placeholder<P>(mut self, placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.placeholder = placeholder.into();
        self
    }

    /// Picks the span to mask for a local part of `mask_end` characters.
    ///
    /// Returns `None` when there is no local part to mask.
    fn span_for(mask_end: usize) -> Option<MaskSpan> {
        match mask_end {
            0 => None,
            // Clamped to the local part so the `@` is never replaced.
            n if n < SHORT_LOCAL_PART => Some(MaskSpan::fixed(
                1,
                SHORT_MASK_WIDTH.min(n - 1),
                SHORT_MASK_WIDTH,
            )),
            n => Some(MaskSpan::exact(LONG_MASK_START, n - LONG_MASK_START - 1)),
        }
    }

    /// Applies the policy to a raw string.
    ///
    /// This method is total; values without a local part become the placeholder.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        self.render(value, local_part_len(value))
    }

    /// Masks a single address.
    #[must_use]
    pub fn mask(&self, address: &EmailAddress) -> MaskedAddress {
        MaskedAddress::new(self.render(address.as_str(), address.local_part_len()))
    }

    fn render(&self, value: &str, mask_end: Option<usize>) -> String {
        mask_end.and_then(Self::span_for).map_or_else(
            || self.placeholder.clone().into_owned(),
            |span| span.apply_to(value, self.mask_char),
        )
    }

    /// Masks every address, preserving order. The input is left untouched.
    #[must_use]
    pub fn mask_all(&self, addresses: &[EmailAddress]) -> Vec<MaskedAddress> {
        addresses.iter().map(|address| self.mask(address)).collect()
    }
}

impl Default for EmailMaskPolicy {
    fn default() -> Self {
        Self::new()
    }
}
