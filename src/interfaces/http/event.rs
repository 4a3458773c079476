use crate::domain::transaction::{TransactionId, empty_meta};
use crate::error::PayloadError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Request body as delivered by the invocation layer: either the raw encoded
/// string or a mapping that was already decoded upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    Raw(String),
    Structured(Value),
}

/// Event handed to the payment initiator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatorEvent {
    #[serde(default)]
    pub body: Option<RequestBody>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl InitiatorEvent {
    pub fn with_body(body: RequestBody) -> Self {
        Self {
            body: Some(body),
            is_base64_encoded: false,
        }
    }

    /// Decodes the body into transaction metadata.
    ///
    /// A missing, empty or falsy body yields an empty mapping. Any value that
    /// decodes is kept as-is; decoding failures are returned so the caller
    /// decides how to recover.
    pub fn payload(&self) -> Result<Value, PayloadError> {
        match &self.body {
            None => Ok(empty_meta()),
            Some(RequestBody::Raw(raw)) if raw.is_empty() => Ok(empty_meta()),
            Some(RequestBody::Raw(raw)) if self.is_base64_encoded => {
                let bytes = B64.decode(raw)?;
                Ok(serde_json::from_slice(&bytes)?)
            }
            Some(RequestBody::Raw(raw)) => Ok(serde_json::from_str(raw)?),
            Some(RequestBody::Structured(value)) if is_falsy(value) => Ok(empty_meta()),
            Some(RequestBody::Structured(value)) => Ok(value.clone()),
        }
    }
}

/// `null`, `false`, zero, and empty strings, arrays or objects.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Event handed to the status checker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    /// Values are left untyped; a non-string `transaction_id` counts as missing.
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, Value>>,
}

impl StatusEvent {
    pub fn for_transaction(transaction_id: &str) -> Self {
        let params = HashMap::from([(
            "transaction_id".to_string(),
            Value::String(transaction_id.to_string()),
        )]);
        Self {
            query_string_parameters: Some(params),
        }
    }

    /// The requested `transaction_id`, if present and non-empty.
    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.query_string_parameters
            .as_ref()?
            .get("transaction_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(TransactionId::from)
    }
}
