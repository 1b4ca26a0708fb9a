//! Persisted preference storage.
//!
//! The preference lives in an origin-scoped key-value area under the key
//! `"theme"`. Storage is modeled after browser local storage: reads that fail
//! behave as if the key were absent, writes that fail are silent no-ops, and
//! the stored value survives across page loads. The crate never deletes the
//! key.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::mode::{ColorMode, StoredPreference};

/// The key the preference is stored under.
pub const THEME_KEY: &str = "theme";

/// Durable key-value storage for the theme preference.
///
/// Both operations take `&self`: the host environment serializes event
/// handling, so there is a single writer path and implementations use
/// interior mutability rather than locking.
pub trait ThemeStore {
    /// Reads the stored preference. [`StoredPreference::Unset`] when the key
    /// is absent or the backing area is unavailable;
    /// [`StoredPreference::Unrecognized`] when the key is present but does
    /// not hold a mode.
    fn get(&self) -> StoredPreference;

    /// Persists the preference. A no-op when the backing area is unavailable.
    fn set(&self, mode: ColorMode);
}

/// In-process store with no persistence, for tests and embedded hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<StoredPreference>,
}

impl MemoryStore {
    /// Creates an empty store (preference unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a preference already present.
    pub fn with_mode(mode: ColorMode) -> Self {
        Self {
            value: RefCell::new(StoredPreference::Mode(mode)),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self) -> StoredPreference {
        *self.value.borrow()
    }

    fn set(&self, mode: ColorMode) {
        *self.value.borrow_mut() = StoredPreference::Mode(mode);
    }
}

/// Store backed by a JSON object file shared with other keys.
///
/// Writes are read-modify-write so unrelated entries in the same file are
/// preserved, mirroring a storage area shared by the whole origin.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given file. The file need not exist yet; it
    /// is created on the first successful write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Map<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}

impl ThemeStore for FileStore {
    fn get(&self) -> StoredPreference {
        match self.read_entries().get(THEME_KEY) {
            None => StoredPreference::Unset,
            Some(value) => value
                .as_str()
                .map(StoredPreference::from_value)
                // Present but not even a string: still an occupied key.
                .unwrap_or(StoredPreference::Unrecognized),
        }
    }

    fn set(&self, mode: ColorMode) {
        let mut entries = self.read_entries();
        entries.insert(
            THEME_KEY.to_string(),
            Value::String(mode.as_str().to_string()),
        );
        if let Ok(text) = serde_json::to_string_pretty(&Value::Object(entries)) {
            let _ = fs::write(&self.path, text);
        }
    }
}
