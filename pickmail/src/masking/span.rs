//! Character-span masking for string values.
//!
//! Spans are pure string transformations. They do not look for `@` or decide
//! what to mask; [`super::EmailMaskPolicy`] picks the span.

/// Replaces `len` characters starting at `start` with `width` mask characters.
///
/// Positions count Unicode scalar values. `width` may differ from `len`: the
/// fixed two-character mask for short local parts always writes two mask
/// characters regardless of how many it replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MaskSpan {
    /// Index of the first replaced character.
    start: usize,
    /// Number of characters replaced.
    len: usize,
    /// Number of mask characters written in their place; `None` writes one
    /// per replaced character.
    width: Option<usize>,
}

impl MaskSpan {
    /// A span whose replacement is as wide as what it replaces.
    pub(crate) fn exact(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            width: None,
        }
    }

    /// A span that replaces `len` characters with exactly `width` mask characters.
    pub(crate) fn fixed(start: usize, len: usize, width: usize) -> Self {
        Self {
            start,
            len,
            width: Some(width),
        }
    }

    /// Applies the span to `value`.
    ///
    /// A span reaching past the end of `value` is clamped to it. Fixed-width
    /// spans still write all of their mask characters.
    pub(crate) fn apply_to(&self, value: &str, mask_char: char) -> String {
        let chars: Vec<char> = value.chars().collect();
        let start = self.start.min(chars.len());
        let end = (start + self.len).min(chars.len());
        let width = self.width.unwrap_or(end - start);

        let mut masked = String::with_capacity(value.len() + width);
        masked.extend(&chars[..start]);
        masked.extend(std::iter::repeat(mask_char).take(width));
        masked.extend(&chars[end..]);
        masked
    }
}
