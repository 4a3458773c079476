use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an inbound request body could not be turned into transaction metadata.
///
/// These never fail a request; the initiator logs them and stores empty metadata.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("body is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
