//! Storage for the word collection
//!
//! The backing format is a single JSON array of word objects, matching the
//! seed files users edit by hand:
//!
//! ```json
//! [
//!   { "word": "laconic", "definition": "...", "correct": 3, "wrong": 1 }
//! ]
//! ```
//!
//! Seed files usually lack the `correct`/`wrong` counters entirely; `load`
//! fills them in with 0 and writes the corrected collection back before
//! returning, so every record downstream always has both counters.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;
use thiserror::Error;

use super::models::WordRecord;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed word data: {0}")]
    Malformed(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable store for the word collection.
///
/// The store owns the canonical collection; callers get transient copies
/// and write back the whole collection in one `save`.
pub trait WordStore: Send + Sync + 'static {
    /// Load all word records. A missing backing collection is not an
    /// error and yields an empty list; unreadable or malformed data is.
    fn load(&self) -> Result<Vec<WordRecord>>;

    /// Replace the entire backing collection. No partial write may be
    /// visible to a subsequent `load`.
    fn save(&self, records: &[WordRecord]) -> Result<()>;
}

/// File-backed store persisting to one pretty-printed JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<WordRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let raw: Value = serde_json::from_str(&content)?;
        let Value::Array(entries) = raw else {
            return Err(StorageError::Malformed(
                "top-level value is not an array".to_string(),
            ));
        };

        let mut changed = false;
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let Value::Object(mut obj) = entry else {
                return Err(StorageError::Malformed(
                    "word entry is not an object".to_string(),
                ));
            };
            for key in ["correct", "wrong"] {
                if !obj.contains_key(key) {
                    obj.insert(key.to_string(), Value::from(0u32));
                    changed = true;
                }
            }
            let record: WordRecord = serde_json::from_value(Value::Object(obj))?;
            records.push(record);
        }

        if changed {
            log::info!(
                "filled in missing counters in {}, writing corrected file",
                self.path.display()
            );
            self.save(&records)?;
        }

        Ok(records)
    }

    fn save(&self, records: &[WordRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;

        // Write to a temp file in the same directory, then rename over the
        // target, so readers never observe a half-written collection.
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::Io(e.error))?;

        Ok(())
    }
}

/// In-memory store, used as a test double for the file store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<WordRecord>>,
}

impl MemoryStore {
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl WordStore for MemoryStore {
    fn load(&self) -> Result<Vec<WordRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[WordRecord]) -> Result<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        *guard = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("words.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let records = store.load().unwrap();
        assert!(records.is_empty());
        // Loading must not create the file
        assert!(!store.path().exists());
    }

    #[test]
    fn test_normalization_is_persisted_before_load_returns() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"word": "laconic", "definition": "terse"}, {"word": "venal", "correct": 2}]"#,
        )
        .unwrap();

        let records = store.load().unwrap();
        assert_eq!(records[0].correct, 0);
        assert_eq!(records[0].wrong, 0);
        assert_eq!(records[1].correct, 2);
        assert_eq!(records[1].wrong, 0);

        // The corrected collection must already be on disk
        let on_disk: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk[0]["correct"], 0);
        assert_eq!(on_disk[0]["wrong"], 0);
        assert_eq!(on_disk[1]["wrong"], 0);
        // Display fields survive the rewrite
        assert_eq!(on_disk[0]["definition"], "terse");
    }

    #[test]
    fn test_save_load_round_trip_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"word": "laconic", "definition": "terse", "synonyms": ["curt"], "correct": 1, "wrong": 4}]"#,
        )
        .unwrap();

        let records = store.load().unwrap();
        store.save(&records).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        store.save(&store.load().unwrap()).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"word": "laconic", "pronunciation": "luh-KON-ik", "synonyms": ["terse", "curt"], "correct": 0, "wrong": 0}]"#,
        )
        .unwrap();

        let records = store.load().unwrap();
        store.save(&records).unwrap();

        let on_disk: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk[0]["pronunciation"], "luh-KON-ik");
        assert_eq!(on_disk[0]["synonyms"], serde_json::json!(["terse", "curt"]));
    }

    #[test]
    fn test_malformed_top_level_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"word": "laconic"}"#).unwrap();

        assert!(matches!(
            store.load(),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_object_entry_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"["laconic"]"#).unwrap();

        assert!(matches!(store.load(), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_unreadable_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_negative_counter_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"word": "laconic", "correct": -1, "wrong": 0}]"#).unwrap();

        assert!(store.load().is_err());
    }
}
