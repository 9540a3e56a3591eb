//! Key/value preference storage.
//!
//! Writes are best-effort: a failed write is logged and otherwise ignored, so
//! losing a preference never breaks searching.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use stories_logging::{stories_debug, stories_error, stories_warn};

use crate::AtomicFileWriter;

pub const PREFS_FILENAME: &str = ".stories_prefs.ron";

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

fn lock(map: &Mutex<BTreeMap<String, String>>) -> MutexGuard<'_, BTreeMap<String, String>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Process-local store; forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_owned(), value.to_owned());
    }
}

/// Store backed by a RON map in `{dir}/.stories_prefs.ron`.
///
/// The file is read once on construction; every `set` rewrites it atomically.
/// A `set` whose write fails leaves the store as it was.
#[derive(Debug)]
pub struct RonPreferenceStore {
    writer: AtomicFileWriter,
    values: Mutex<BTreeMap<String, String>>,
}

impl RonPreferenceStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let values = load_values(&dir.join(PREFS_FILENAME));
        Self {
            writer: AtomicFileWriter::new(dir),
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(PREFS_FILENAME)
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = lock(&self.values);
        if values.get(key).map(String::as_str) == Some(value) {
            return;
        }
        let previous = values.insert(key.to_owned(), value.to_owned());

        let written = match ron::ser::to_string_pretty(&*values, ron::ser::PrettyConfig::new()) {
            Ok(content) => match self.writer.write(PREFS_FILENAME, &content) {
                Ok(_) => true,
                Err(err) => {
                    stories_error!("Failed to write preferences to {:?}: {}", self.path(), err);
                    false
                }
            },
            Err(err) => {
                stories_error!("Failed to serialize preferences: {}", err);
                false
            }
        };

        // Keep the map in step with the file.
        if !written {
            match previous {
                Some(old) => values.insert(key.to_owned(), old),
                None => values.remove(key),
            };
        }
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            stories_warn!("Failed to read preferences from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };
    match ron::from_str(&content) {
        Ok(values) => {
            stories_debug!("Loaded preferences from {:?}", path);
            values
        }
        Err(err) => {
            stories_warn!("Failed to parse preferences from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}

/// A single string preference that survives restarts.
///
/// An empty stored value counts as unset, so clearing the field and
/// restarting brings the default back.
#[derive(Clone)]
pub struct PersistedPreference {
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl PersistedPreference {
    pub fn new(store: Arc<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load_or(&self, default: &str) -> String {
        match self.store.get(&self.key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_owned(),
        }
    }

    pub fn save(&self, value: &str) {
        self.store.set(&self.key, value);
    }
}
