use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;

use super::backend::{MemoryBackend, StorageBackend};

/// Storage key holding the favorite-id set (JSON array of strings).
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key holding the theme (`"light"` or `"dark"`, unquoted).
pub const THEME_KEY: &str = "theme";

/// The only path from the stores to durable storage.
///
/// Reads never fail: absent, unreadable and malformed values all come back
/// as `None` (logged), and callers substitute their defaults. Writes report
/// failure so the caller can decide whether to surface it.
pub struct PersistenceGateway {
    backend: Box<dyn StorageBackend>,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl PersistenceGateway {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Gateway over a fresh `MemoryBackend`.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Raw stored string, or `None` if absent or the backend could not be read.
    #[must_use]
    pub fn read(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "Could not read '{key}' from {} storage, using default: {e}",
                    self.backend.name()
                );
                None
            }
        }
    }

    pub fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.backend.write(key, value).inspect_err(|e| {
            log::warn!("Could not write '{key}' to {} storage: {e}", self.backend.name());
        })
    }

    /// Stored JSON decoded as `T`, or `None` if absent or malformed.
    #[must_use]
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed value stored under '{key}': {e}");
                None
            }
        }
    }

    pub fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize value for '{key}': {e}"))
        })?;
        self.write(key, &json)
    }
}
