//! Error types for the cache
//!
//! Provides the closed set of error kinds using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Error kinds returned by cache operations.
///
/// Both variants are recoverable and carry the offending key. Callers tell
/// them apart by pattern matching or equality, never by message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key exists but its deadline has passed
    #[error("Key expired: {0}")]
    Expired(String),

    /// Key is not present in the cache
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

impl CacheError {
    /// Returns the key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            CacheError::Expired(key) | CacheError::KeyNotFound(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CacheError::Expired("a".to_string()).to_string(),
            "Key expired: a"
        );
        assert_eq!(
            CacheError::KeyNotFound("b".to_string()).to_string(),
            "Key not found: b"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CacheError::Expired("a".to_string()),
            CacheError::Expired("a".to_string())
        );
        assert_ne!(
            CacheError::Expired("a".to_string()),
            CacheError::KeyNotFound("a".to_string())
        );
    }

    #[test]
    fn test_error_key() {
        assert_eq!(CacheError::Expired("k1".to_string()).key(), "k1");
        assert_eq!(CacheError::KeyNotFound("k2".to_string()).key(), "k2");
    }
}
