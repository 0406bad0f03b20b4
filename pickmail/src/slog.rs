//! Adapters for emitting masked addresses through `slog`.
//!
//! This module connects [`MaskedAddress`] and [`EmailMaskPolicy`] with `slog`
//! by providing `slog::Value` implementations that only ever see masked
//! output. Raw [`EmailAddress`] values deliberately have no `slog::Value`
//! impl; they must go through [`IntoMaskedJson`] to be logged.
//!
//! Serialization failures are represented as placeholder strings rather than
//! propagated as errors.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{EmailAddress, EmailMaskPolicy, MaskedAddress};

impl SlogValue for MaskedAddress {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}

/// A `slog::Value` that emits a list of masked addresses as a JSON array.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    /// Builds the payload from addresses that are already masked.
    #[must_use]
    pub fn from_masked(masked: &[MaskedAddress]) -> Self {
        let value = serde_json::to_value(masked).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize masked addresses".to_string())
        });
        Self { value }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts address lists into a `slog::Value` that logs their masked form.
///
/// ## Example
/// ```ignore
/// use pickmail::slog::IntoMaskedJson;
///
/// debug!(logger, "picked"; "addresses" => picked.into_masked_json(&policy));
/// ```
pub trait IntoMaskedJson {
    /// Masks every address with `policy` and wraps the result for logging.
    fn into_masked_json(self, policy: &EmailMaskPolicy) -> MaskedJson;
}

impl IntoMaskedJson for &[EmailAddress] {
    fn into_masked_json(self, policy: &EmailMaskPolicy) -> MaskedJson {
        MaskedJson::from_masked(&policy.mask_all(self))
    }
}

impl IntoMaskedJson for &Vec<EmailAddress> {
    fn into_masked_json(self, policy: &EmailMaskPolicy) -> MaskedJson {
        self.as_slice().into_masked_json(policy)
    }
}
