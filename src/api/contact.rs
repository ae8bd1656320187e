//! Contact form sink: presence check and echo, nothing is stored or sent.
//!
//! Fields may hold any JSON value. `null`, `false`, `0`, `""`, `[]` and `{}`
//! count as missing; anything else is accepted and echoed unchanged.

use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Received {
    pub name: Value,
    pub email: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactReceipt {
    pub status: String,
    pub received: Received,
}

impl ContactForm {
    /// Accept the form only when every field is present and non-empty.
    pub fn into_receipt(self) -> Result<(ContactReceipt, Value), ApiError> {
        let (Some(name), Some(email), Some(message)) =
            (filled(self.name), filled(self.email), filled(self.message))
        else {
            return Err(ApiError::BadRequest("Missing fields".to_string()));
        };

        let receipt = ContactReceipt {
            status: "ok".to_string(),
            received: Received { name, email },
        };
        Ok((receipt, message))
    }
}

fn filled(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// The body is parsed as JSON regardless of `Content-Type`.
pub async fn submit(body: Bytes) -> Result<Json<ContactReceipt>, ApiError> {
    let form: ContactForm = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let (receipt, message) = form.into_receipt()?;
    tracing::info!(
        email = %receipt.received.email,
        message_len = message.to_string().len(),
        "Contact form received"
    );

    Ok(Json(receipt))
}
