//! Persisted language slot
//!
//! The chosen language survives restarts through a single key-value entry.
//! A missing or unreadable value is not an error for the caller: the language
//! context falls back to its default.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Mutex;

use thiserror::Error;

/// Name of the entry holding the language code.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access language store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode language store: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Language store lock was poisoned")]
    Poisoned,
}

/// Storage for the persisted language code.
pub trait LanguageStore: Debug + Send + Sync {
    /// Read the stored code, `None` when nothing was saved yet.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored code.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be written.
    fn save(&self, code: &str) -> Result<(), StoreError>;
}

/// Process-local slot, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    slot: Mutex<Option<String>>,
}

impl MemoryLanguageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `code`, as if saved by an earlier session.
    #[must_use]
    pub fn with_value(code: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(code.into())) }
    }
}

impl LanguageStore for MemoryLanguageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, code: &str) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(code.to_string());
        Ok(())
    }
}

/// JSON file holding a `{"language": "<code>"}` object.
///
/// Other entries in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            tracing::debug!("Language store not found: {:?}", self.path);
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl LanguageStore for FileLanguageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(LANGUAGE_KEY))
    }

    fn save(&self, code: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the switch.
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable language store {:?}: {}", self.path, e);
            HashMap::new()
        });
        entries.insert(LANGUAGE_KEY.to_string(), code.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        tracing::debug!("Saved language '{}' to {:?}", code, self.path);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn memory_store_starts_empty_and_keeps_last_value() {
        let store = MemoryLanguageStore::new();

        assert!(store.load().unwrap().is_none());
        store.save("en").unwrap();
        store.save("es").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("es"));
    }

    #[rstest]
    fn file_store_missing_file_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileLanguageStore::new(temp_dir.path().join("language.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[rstest]
    fn file_store_round_trips_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("language.json");

        FileLanguageStore::new(&path).save("en").unwrap();
        let reopened = FileLanguageStore::new(&path);

        assert_eq!(reopened.load().unwrap().as_deref(), Some("en"));
    }

    #[rstest]
    fn file_store_preserves_other_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("language.json");
        fs::write(&path, r#"{"theme": "dark", "language": "es"}"#).unwrap();

        FileLanguageStore::new(&path).save("en").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_that!(content, contains_substring("\"theme\": \"dark\""));
        assert_that!(content, contains_substring("\"language\": \"en\""));
    }

    #[rstest]
    fn file_store_invalid_json_is_a_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("language.json");
        fs::write(&path, "not json").unwrap();

        let store = FileLanguageStore::new(&path);

        assert!(matches!(store.load(), Err(StoreError::Encoding(_))));
        // Saving over a corrupt file recovers it.
        store.save("es").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("es"));
    }
}
