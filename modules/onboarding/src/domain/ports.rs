use async_trait::async_trait;
use thiserror::Error;

/// Output port: host-provided key-value storage. Browser local storage in
/// the web host, a settings table elsewhere, an in-memory map in tests.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Errors the storage port may surface.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("storage rejected write to '{key}': {message}")]
    WriteRejected { key: String, message: String },

    #[error("could not encode value for '{key}': {message}")]
    Encoding { key: String, message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn write_rejected(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteRejected {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn encoding(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoding {
            key: key.into(),
            message: message.into(),
        }
    }
}
