//! Theme preference service

use crate::audit::AuditAction;
use crate::error::DepensesResult;
use crate::models::ThemeMode;
use crate::storage::Storage;

pub struct ThemeService<'a> {
    storage: &'a Storage,
}

impl<'a> ThemeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn current(&self) -> DepensesResult<ThemeMode> {
        self.storage.preferences.theme()
    }

    /// Switch light <-> dark, returning the new theme
    pub fn toggle(&self) -> DepensesResult<ThemeMode> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn set(&self, theme: ThemeMode) -> DepensesResult<()> {
        let previous = self.storage.preferences.set_theme(theme)?;
        self.storage.preferences.save()?;
        if previous != theme {
            self.storage.record(AuditAction::ThemeChanged {
                from: previous,
                to: theme,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::slots::THEME_SLOT;
    use crate::storage::{MemorySlotStore, SlotStore};
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn test_toggle_persists() {
        let slots = Arc::new(MemorySlotStore::new());
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let storage = Storage::open(slots.clone(), today).unwrap();
        let service = ThemeService::new(&storage);

        assert_eq!(service.current().unwrap(), ThemeMode::Light);
        assert_eq!(service.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(slots.read(THEME_SLOT).unwrap().as_deref(), Some("dark"));
        assert_eq!(service.toggle().unwrap(), ThemeMode::Light);
    }
}
