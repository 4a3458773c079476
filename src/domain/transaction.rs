use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Server-assigned identifier of a transaction record.
///
/// Generated identifiers are random UUIDs. Lookups accept any string, so an
/// identifier read back from a request is not required to be a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle status of a transaction.
///
/// Only `pending` is ever written here. Records written by other processes may
/// carry other values, which are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Pending,
    Other(String),
}

impl From<String> for TransactionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Pending => "pending".to_string(),
            TransactionStatus::Other(value) => value,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Other(value) => f.write_str(value),
        }
    }
}

/// One initiated payment attempt, as persisted in the transactions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    /// Absent only for records written by something other than the initiator.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Missing or unparsable timestamps read back as `None`.
    #[serde(default, with = "utc_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Caller-submitted payload, stored as-is.
    #[serde(default = "empty_meta")]
    pub meta: Value,
}

impl TransactionRecord {
    /// Builds a new `pending` record with a freshly generated identifier.
    ///
    /// `created_at` is truncated to the stored microsecond precision.
    pub fn pending(meta: Value) -> Self {
        Self {
            transaction_id: TransactionId::generate(),
            status: Some(TransactionStatus::Pending),
            created_at: Some(Utc::now().trunc_subsecs(6)),
            meta,
        }
    }
}

/// The empty key-value mapping used when no usable payload was submitted.
pub fn empty_meta() -> Value {
    Value::Object(Map::new())
}

/// RFC 3339 UTC timestamps with microsecond precision and a `Z` suffix.
///
/// Reading is lenient: a value that is not an RFC 3339 string becomes `None`.
mod utc_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Micros, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }
}
