use thiserror::Error;

/// Errors raised by a [`KeyValueStorage`](crate::session::KeyValueStorage) backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("Failed to remove {key}: {message}")]
    Remove { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    pub fn write(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn remove(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Remove {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
