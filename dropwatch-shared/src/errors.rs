use thiserror::Error;

/// Failures raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store could not be reached (private mode, quota, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A value could not be encoded before writing.
    #[error("failed to serialize value for key '{key}': {reason}")]
    Serialization {
        /// Storage key being written.
        key: String,
        /// Encoder message.
        reason: String,
    },
}

impl StorageError {
    /// Build a [`StorageError::Serialization`] from a `serde_json` failure.
    pub fn serialization(key: &str, err: &serde_json::Error) -> Self {
        Self::Serialization {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display() {
        let err = StorageError::Unavailable("quota exceeded".into());
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
    }

    #[test]
    fn serialization_keeps_key() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = StorageError::serialization("auth-storage", &json_err);
        assert!(err.to_string().contains("auth-storage"));
    }
}
