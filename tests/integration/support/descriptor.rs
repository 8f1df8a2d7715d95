use serde_json::Value;
use std::fs;

use super::super::sample_descriptor_path;

/// The shipped sample as a mutable JSON tree, for tests that break one field.
pub fn sample_value() -> Value {
    let raw = fs::read_to_string(sample_descriptor_path()).expect("sample descriptor readable");
    serde_json::from_str(&raw).expect("sample descriptor is JSON")
}

pub fn to_raw(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("serialize test descriptor")
}
