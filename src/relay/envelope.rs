//! Envelope unwrapping.
//!
//! # Rules
//! - Body must be a JSON object, otherwise the upstream is considered broken
//! - `StatusChecked`: `status` must be exactly the string `"OK"` and `data`
//!   must be present; any other shape is a rejection
//! - `DataOnly`: `data` is relayed as-is (including `null`); only an absent
//!   key falls back to the route's empty container

use serde_json::Value;

use crate::relay::{EnvelopeKind, RelayError};

const STATUS_OK: &str = "OK";

pub fn unwrap_envelope(kind: EnvelopeKind, body: Value, empty: &Value) -> Result<Value, RelayError> {
    let Value::Object(mut map) = body else {
        return Err(RelayError::Rejected);
    };

    match kind {
        EnvelopeKind::StatusChecked => {
            if map.get("status").and_then(Value::as_str) != Some(STATUS_OK) {
                return Err(RelayError::Rejected);
            }
            map.remove("data").ok_or(RelayError::Rejected)
        }
        EnvelopeKind::DataOnly => Ok(map.remove("data").unwrap_or_else(|| empty.clone())),
    }
}
