//! Named key-value slots
//!
//! Each persisted collection lives in one slot holding a text value. The
//! file-backed store keeps one file per key; the in-memory store backs tests
//! and embedders that persist elsewhere.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DepensesError;

use super::file_io::{read_text, write_text_atomic};

/// Slot holding the JSON array of expenses
pub const EXPENSES_SLOT: &str = "expenses";
/// Slot holding the JSON array of budgets
pub const BUDGETS_SLOT: &str = "budgets";
/// Slot holding `light` or `dark`
pub const THEME_SLOT: &str = "themeMode";

/// A durable text value store addressed by key
pub trait SlotStore: Send + Sync {
    /// Read a slot; `None` when it has never been written
    fn read(&self, key: &str) -> Result<Option<String>, DepensesError>;

    /// Replace the value of a slot
    fn write(&self, key: &str, value: &str) -> Result<(), DepensesError>;
}

/// Slot store keeping one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, DepensesError> {
        read_text(self.path_for(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DepensesError> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// Slot store held entirely in memory
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-populated slots
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: RwLock::new(
                slots
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, DepensesError> {
        let slots = self.slots.read().map_err(|e| {
            DepensesError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DepensesError> {
        let mut slots = self.slots.write().map_err(|e| {
            DepensesError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.read(THEME_SLOT).unwrap(), None);
        store.write(THEME_SLOT, "dark").unwrap();
        assert_eq!(store.read(THEME_SLOT).unwrap().as_deref(), Some("dark"));
        assert!(temp_dir.path().join("themeMode").exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySlotStore::with_slots([(BUDGETS_SLOT, "[]")]);

        assert_eq!(store.read(BUDGETS_SLOT).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.read(EXPENSES_SLOT).unwrap(), None);

        store.write(EXPENSES_SLOT, "[]").unwrap();
        assert_eq!(store.read(EXPENSES_SLOT).unwrap().as_deref(), Some("[]"));
    }
}
