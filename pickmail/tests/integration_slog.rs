//! Integration tests for the slog adapters.
//!
//! These tests verify that:
//! - `MaskedAddress` emits its masked text as a plain string
//! - `into_masked_json()` emits a JSON array of masked addresses
//! - no raw address reaches the serializer

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use pickmail::{
    slog::{IntoMaskedJson, MaskedJson},
    EmailAddress, EmailMaskPolicy,
};
use serde_json::{json, Value as JsonValue};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    // For nested serde values, we capture the JSON representation
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn readers() -> Vec<EmailAddress> {
    vec![
        EmailAddress::from("alice@example.com"),
        EmailAddress::from("bob@example.com"),
    ]
}

#[test]
fn test_masked_address_emits_masked_string() {
    let masked = EmailMaskPolicy::new().mask(&EmailAddress::from("alice@example.com"));

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&masked, "reader", &mut serializer);

    assert_eq!(
        serializer.get("reader"),
        Some(CapturedValue::Str("al**e@example.com".into()))
    );
}

#[test]
fn test_into_masked_json_emits_array() {
    let readers = readers();
    let value = readers.as_slice().into_masked_json(&EmailMaskPolicy::new());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&value, "picked", &mut serializer);

    assert_eq!(
        serializer.get("picked"),
        Some(CapturedValue::Serde(json!([
            "al**e@example.com",
            "b**@example.com"
        ])))
    );
}

#[test]
fn test_into_masked_json_respects_mask_char() {
    let readers = readers();
    let value = (&readers).into_masked_json(&EmailMaskPolicy::new().with_mask_char('#'));

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&value, "picked", &mut serializer);

    if let Some(CapturedValue::Serde(json)) = serializer.get("picked") {
        assert_eq!(json[0], "al##e@example.com");
        assert_eq!(json[1], "b##@example.com");
    } else {
        panic!("Expected Serde value for 'picked' key");
    }
}

#[test]
fn test_raw_addresses_never_reach_the_serializer() {
    let readers = readers();
    let value = readers.as_slice().into_masked_json(&EmailMaskPolicy::new());

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&value, "picked", &mut serializer);

    let captured = format!("{:?}", serializer.get("picked"));
    for reader in &readers {
        assert!(!captured.contains(reader.as_str()));
    }
}

#[test]
fn test_empty_list_emits_empty_array() {
    let value = MaskedJson::from_masked(&[]);

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&value, "picked", &mut serializer);

    assert_eq!(serializer.get("picked"), Some(CapturedValue::Serde(json!([]))));
}
