//! # Storage Error Types
//!
//! Failure taxonomy for the snapshot store. Deliberately small: the session
//! layer treats every one of these as a degraded-durability event, logs it,
//! and keeps the in-memory state authoritative.

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors from snapshot store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage medium failed (disk full, permissions, ...).
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped to a storage location.
    ///
    /// Keys are restricted to alphanumeric characters, hyphens and
    /// underscores so a key can never escape the store's base directory.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// A concurrent writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InvalidKey("../escape".to_string());
        assert_eq!(err.to_string(), "invalid storage key '../escape'");

        let err = StoreError::Io {
            key: "retailsports_cart".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("retailsports_cart"));
        assert!(err.to_string().contains("disk full"));
    }
}
