use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Key-value storage for UI preferences.
///
/// Values are plain strings; encoding and decoding are the caller's concern.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Callers treating persistence as best-effort may ignore
    /// the result.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk shape of the preferences file: one flat JSON object whose values
/// are plain strings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

/// Storage backed by a JSON object of string pairs in the user config
/// directory. The whole file is rewritten on every `set`; at one entry per
/// preference that is cheap.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    file: PrefsFile,
}

impl JsonFileStorage {
    /// Load from the default config location, starting empty when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let file = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Failed to parse preferences: {}. Starting fresh.", e);
                    PrefsFile::default()
                }
            },
            Err(_) => PrefsFile::default(),
        };

        Self { path, file }
    }

    /// Preferences file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferrisdocs");
        path.push("prefs.json");
        path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.file)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.file.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.file
            .entries
            .insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::default();
        assert_eq!(storage.get("light"), None);

        storage.set("light", "true").unwrap();
        assert_eq!(storage.get("light").as_deref(), Some("true"));

        storage.set("light", "false").unwrap();
        assert_eq!(storage.get("light").as_deref(), Some("false"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut storage = JsonFileStorage::load_from(path.clone());
        storage.set("light", "false").unwrap();

        // Simulated restart
        let reloaded = JsonFileStorage::load_from(path);
        assert_eq!(reloaded.get("light").as_deref(), Some("false"));
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::load_from(dir.path().join("nope.json"));
        assert_eq!(storage.get("light"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all {{{").unwrap();

        let storage = JsonFileStorage::load_from(path);
        assert_eq!(storage.get("light"), None);
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("prefs.json");

        let mut storage = JsonFileStorage::load_from(path.clone());
        storage.set("light", "true").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_loads_flat_json_object() {
        // The file is a single flat object, no wrapper key
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"light": "false"}"#).unwrap();

        let storage = JsonFileStorage::load_from(path);
        assert_eq!(storage.get("light").as_deref(), Some("false"));
    }

    #[test]
    fn test_file_holds_literal_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut storage = JsonFileStorage::load_from(path.clone());
        storage.set("light", "true").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"light\""));
        assert!(contents.contains("\"true\""));
    }
}
