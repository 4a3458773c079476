use crate::domain::transaction::{TransactionId, TransactionStatus};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

/// HTTP-shaped result handed back to the invocation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded payload.
    pub body: String,
}

/// Body returned by both handlers on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionView {
    pub transaction_id: TransactionId,
    pub status: Option<TransactionStatus>,
}

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

impl ApiResponse {
    /// Builds a response whose body is `payload` encoded as JSON.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self> {
        let headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        Ok(Self {
            status_code,
            headers,
            body: serde_json::to_string(payload)?,
        })
    }

    /// Builds a `{"message": ...}` response.
    pub fn message(status_code: u16, message: &str) -> Result<Self> {
        Self::json(status_code, &Message { message })
    }
}
