//! Unwrapping of the `success_request` / `info` envelopes SMSClub puts around payloads.

use serde_json::Value;

pub const SUCCESS_REQUEST_KEY: &str = "success_request";
pub const INFO_KEY: &str = "info";

/// Replace `{"success_request": X}` with `X`. Anything else passes through.
pub fn unwrap_success_request(value: Value) -> Value {
    unwrap_key(value, SUCCESS_REQUEST_KEY)
}

/// Replace `{"info": X}` with `X`. Anything else passes through.
pub fn unwrap_info(value: Value) -> Value {
    unwrap_key(value, INFO_KEY)
}

// A present-but-null key counts as absent.
fn unwrap_key(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(inner) if !inner.is_null() => inner,
            Some(null) => {
                map.insert(key.to_owned(), null);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}
