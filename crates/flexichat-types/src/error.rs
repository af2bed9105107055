//! Error types for the memory store.

use thiserror::Error;

/// Errors from durable-record operations.
///
/// Load failures are repaired to a default record by the store; save
/// failures are logged and swallowed by the engine. Neither ever reaches
/// the caller of the dialogue entry point.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().contains("record io error"));
    }
}
