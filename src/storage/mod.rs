//! Storage layer for Mes Dépenses
//!
//! Every collection is persisted whole, as text, in a named slot of a
//! [`SlotStore`]. [`Storage`] is the single owned state object: it is built
//! once by [`Storage::open`], which hydrates each repository from its slot or
//! seeds the sample data on first run, and is then passed by reference to the
//! services.

pub mod budgets;
pub mod defaults;
pub mod expenses;
pub mod file_io;
pub mod preferences;
pub mod slots;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use preferences::PreferenceRepository;
pub use slots::{FileSlotStore, MemorySlotStore, SlotStore};

use std::fmt::Display;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::config::paths::DepensesPaths;
use crate::error::DepensesError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    slots: Arc<dyn SlotStore>,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    pub preferences: PreferenceRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Build the store over `slots` and hydrate it
    ///
    /// Absent slots are seeded with the sample data (dated relative to
    /// `today`) and written back immediately. A slot that exists but cannot
    /// be parsed is an error.
    pub fn open(slots: Arc<dyn SlotStore>, today: NaiveDate) -> Result<Self, DepensesError> {
        let storage = Self::unloaded(slots);
        storage.load_all(today)?;
        Ok(storage)
    }

    /// Overwrite every slot with the sample data without reading them
    ///
    /// Works on a store whose slots no longer parse.
    pub fn reset_slots(slots: Arc<dyn SlotStore>, today: NaiveDate) -> Result<Self, DepensesError> {
        let storage = Self::unloaded(slots);
        storage.reset(today)?;
        info!("store reset to sample data");
        Ok(storage)
    }

    fn unloaded(slots: Arc<dyn SlotStore>) -> Self {
        Self {
            expenses: ExpenseRepository::new(slots.clone()),
            budgets: BudgetRepository::new(slots.clone()),
            preferences: PreferenceRepository::new(slots.clone()),
            slots,
            audit: None,
        }
    }

    /// Open the file-backed store under `paths`
    pub fn open_files(paths: &DepensesPaths, today: NaiveDate) -> Result<Self, DepensesError> {
        Self::open(file_slots(paths)?, today)
    }

    /// [`reset_slots`](Self::reset_slots) on the file-backed store
    pub fn reset_files(paths: &DepensesPaths, today: NaiveDate) -> Result<Self, DepensesError> {
        Self::reset_slots(file_slots(paths)?, today)
    }

    /// Record every mutation in an append-only audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn slots(&self) -> &Arc<dyn SlotStore> {
        &self.slots
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn load_all(&self, today: NaiveDate) -> Result<(), DepensesError> {
        if !self.expenses.load()? {
            info!("no stored expenses, seeding sample data");
            self.expenses.replace_all(defaults::default_expenses(today))?;
            self.expenses.save()?;
        }
        if !self.budgets.load()? {
            info!("no stored budgets, seeding sample data");
            self.budgets.replace_all(defaults::default_budgets())?;
            self.budgets.save()?;
        }
        if !self.preferences.load()? {
            self.preferences.save()?;
        }
        Ok(())
    }

    /// Discard all data and re-seed the samples
    pub fn reset(&self, today: NaiveDate) -> Result<(), DepensesError> {
        self.expenses.replace_all(defaults::default_expenses(today))?;
        self.budgets.replace_all(defaults::default_budgets())?;
        self.preferences.set_theme(Default::default())?;
        self.save_all()
    }

    /// Save all data to its slots
    pub fn save_all(&self) -> Result<(), DepensesError> {
        self.expenses.save()?;
        self.budgets.save()?;
        self.preferences.save()?;
        Ok(())
    }

    /// Append `action` to the audit log, if one is attached
    ///
    /// Called after the change is saved. A failed append is logged as a
    /// warning and the change stays committed.
    pub fn record(&self, action: AuditAction) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&AuditEntry::new(action)) {
            warn!(path = %logger.path().display(), error = %e, "failed to append audit entry");
        }
    }
}

fn file_slots(paths: &DepensesPaths) -> Result<Arc<dyn SlotStore>, DepensesError> {
    paths.ensure_directories()?;
    Ok(Arc::new(FileSlotStore::new(paths.data_dir())))
}

pub(crate) fn read_lock_error<E: Display>(e: E) -> DepensesError {
    DepensesError::Storage(format!("Failed to acquire read lock: {}", e))
}

pub(crate) fn write_lock_error<E: Display>(e: E) -> DepensesError {
    DepensesError::Storage(format!("Failed to acquire write lock: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;
    use crate::storage::slots::{BUDGETS_SLOT, EXPENSES_SLOT, THEME_SLOT};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_first_open_seeds_and_persists_defaults() {
        let slots = Arc::new(MemorySlotStore::new());
        let storage = Storage::open(slots.clone(), today()).unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 13);
        assert_eq!(storage.budgets.count().unwrap(), 10);
        assert_eq!(storage.preferences.theme().unwrap(), ThemeMode::Light);

        assert!(slots.read(EXPENSES_SLOT).unwrap().is_some());
        assert!(slots.read(BUDGETS_SLOT).unwrap().is_some());
        assert_eq!(slots.read(THEME_SLOT).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_existing_slots_are_not_reseeded() {
        let slots = Arc::new(MemorySlotStore::with_slots([
            (EXPENSES_SLOT, "[]"),
            (BUDGETS_SLOT, "[]"),
            (THEME_SLOT, "dark"),
        ]));
        let storage = Storage::open(slots, today()).unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(storage.budgets.count().unwrap(), 0);
        assert_eq!(storage.preferences.theme().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_corrupt_slot_fails_open() {
        let slots = Arc::new(MemorySlotStore::with_slots([(EXPENSES_SLOT, "{{{")]));
        assert!(matches!(
            Storage::open(slots, today()),
            Err(DepensesError::Storage(_))
        ));
    }

    #[test]
    fn test_reset_restores_samples() {
        let slots = Arc::new(MemorySlotStore::with_slots([
            (EXPENSES_SLOT, "[]"),
            (BUDGETS_SLOT, "[]"),
            (THEME_SLOT, "dark"),
        ]));
        let storage = Storage::open(slots, today()).unwrap();
        storage.reset(today()).unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 13);
        assert_eq!(storage.budgets.count().unwrap(), 10);
        assert_eq!(storage.preferences.theme().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_reset_slots_recovers_corrupt_store() {
        let slots = Arc::new(MemorySlotStore::with_slots([
            (EXPENSES_SLOT, "{{{ corrupt"),
            (BUDGETS_SLOT, "[]"),
            (THEME_SLOT, "sepia"),
        ]));
        assert!(Storage::open(slots.clone(), today()).is_err());

        Storage::reset_slots(slots.clone(), today()).unwrap();

        let reopened = Storage::open(slots, today()).unwrap();
        assert_eq!(reopened.expenses.count().unwrap(), 13);
        assert_eq!(reopened.budgets.count().unwrap(), 10);
        assert_eq!(reopened.preferences.theme().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_audit_failure_does_not_fail_the_change() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let slots = Arc::new(MemorySlotStore::with_slots([
            (EXPENSES_SLOT, "[]"),
            (BUDGETS_SLOT, "[]"),
            (THEME_SLOT, "light"),
        ]));
        let storage = Storage::open(slots, today())
            .unwrap()
            .with_audit(AuditLogger::new(blocker.join("audit.log")));

        storage.record(AuditAction::ThemeChanged {
            from: ThemeMode::Light,
            to: ThemeMode::Dark,
        });
        assert!(!blocker.join("audit.log").exists());
    }

    #[test]
    fn test_file_backed_open() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DepensesPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open_files(&paths, today()).unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 13);
        assert!(paths.slot_file("expenses").exists());
        assert!(paths.slot_file("budgets").exists());
        assert!(paths.slot_file("themeMode").exists());

        let reopened = Storage::open_files(&paths, today()).unwrap();
        assert_eq!(
            reopened.expenses.get_all().unwrap(),
            storage.expenses.get_all().unwrap()
        );
    }
}
