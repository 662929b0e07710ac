use std::collections::HashMap;

use crate::errors::CoreError;

/// Durable client-local key/value string storage.
///
/// Implementations: `MemoryBackend` (tests, ephemeral sessions),
/// `FileBackend` (native), `WebStorageBackend` (browser `localStorage`).
/// Reads and writes are synchronous; nothing here suspends.
pub trait StorageBackend {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Stored value for `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Overwrite the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Process-local storage. Lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, e.g. to simulate what a previous session left behind.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl StorageBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileBackend;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::StorageBackend;
    use crate::errors::CoreError;

    /// All keys in one JSON object file: `{"favorites": "[\"eth\"]", "theme": "dark"}`.
    ///
    /// Writes go to a sibling temp file that is then renamed over the
    /// original, so a crash mid-write leaves the previous contents intact.
    #[derive(Debug, Clone)]
    pub struct FileBackend {
        path: PathBuf,
    }

    impl FileBackend {
        /// The file is created on first write; a missing file reads as empty.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load_map(&self) -> Result<BTreeMap<String, String>, CoreError> {
            let contents = match std::fs::read_to_string(&self.path) {
                Ok(contents) => contents,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(e) => return Err(e.into()),
            };
            if contents.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            serde_json::from_str(&contents).map_err(|e| {
                CoreError::Deserialization(format!(
                    "Corrupt storage file {}: {e}",
                    self.path.display()
                ))
            })
        }
    }

    impl StorageBackend for FileBackend {
        fn name(&self) -> &str {
            "file"
        }

        fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
            Ok(self.load_map()?.remove(key))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
            // Only a corrupt file is replaced. I/O failures leave it untouched.
            let mut map = match self.load_map() {
                Ok(map) => map,
                Err(CoreError::Deserialization(e)) => {
                    log::warn!("Discarding unreadable storage file: {e}");
                    BTreeMap::new()
                }
                Err(e) => return Err(e),
            };
            map.insert(key.to_string(), value.to_string());

            let json = serde_json::to_string_pretty(&map).map_err(|e| {
                CoreError::Serialization(format!("Failed to serialize storage map: {e}"))
            })?;

            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let tmp = self.path.with_extension("tmp");
            std::fs::write(&tmp, json)?;
            std::fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebStorageBackend;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::StorageBackend;
    use crate::errors::CoreError;

    /// Browser `window.localStorage`.
    pub struct WebStorageBackend {
        storage: web_sys::Storage,
    }

    impl WebStorageBackend {
        pub fn local() -> Result<Self, CoreError> {
            let window = web_sys::window()
                .ok_or_else(|| CoreError::Storage("No global window object".into()))?;
            let storage = window
                .local_storage()
                .map_err(|e| CoreError::Storage(format!("localStorage access denied: {e:?}")))?
                .ok_or_else(|| CoreError::Storage("localStorage is not available".into()))?;
            Ok(Self { storage })
        }
    }

    impl StorageBackend for WebStorageBackend {
        fn name(&self) -> &str {
            "localStorage"
        }

        fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
            self.storage
                .get_item(key)
                .map_err(|e| CoreError::Storage(format!("Failed to read '{key}': {e:?}")))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
            // Fails when the origin's quota is exhausted or storage is disabled.
            self.storage
                .set_item(key, value)
                .map_err(|e| CoreError::Storage(format!("Failed to write '{key}': {e:?}")))
        }
    }
}
