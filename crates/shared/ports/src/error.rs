use thiserror::Error;

/// Storage-level failures, opaque to the domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage backend failure: {0}")]
    Backend(String),

    #[error("Failed to encode {collection} record: {reason}")]
    Encode { collection: String, reason: String },

    #[error("Failed to decode {collection} record: {reason}")]
    Decode { collection: String, reason: String },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
