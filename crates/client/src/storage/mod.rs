//! Durable key-value storage for the session record.
//!
//! Values are JSON strings, written whole and overwritten on every write.
//! A single process is the only writer, so there is no locking.

mod file;
mod memory;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors from durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-keyed store of string values.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the stored value is not valid
/// JSON for `T`.
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    storage
        .get(key)?
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(StorageError::from)
}

/// Encode and store a JSON value.
///
/// # Errors
///
/// Returns `StorageError` if encoding or writing fails.
pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("civicstorm_user").is_ok());
        assert!(validate_key("a-b_c1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
    }

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::new();
        save_json(&storage, "numbers", &vec![1, 2, 3]).unwrap();
        let loaded: Option<Vec<i32>> = load_json(&storage, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));

        let missing: Option<Vec<i32>> = load_json(&storage, "absent").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_load_json_rejects_garbage() {
        let storage = MemoryStorage::new();
        storage.set("numbers", "not json").unwrap();
        let result: Result<Option<Vec<i32>>, _> = load_json(&storage, "numbers");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
