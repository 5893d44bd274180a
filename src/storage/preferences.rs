//! Preference repository
//!
//! The theme preference is stored as raw text (`light` / `dark`) in the
//! `themeMode` slot.

use std::sync::{Arc, RwLock};

use crate::error::DepensesError;
use crate::models::ThemeMode;

use super::slots::{SlotStore, THEME_SLOT};
use super::{read_lock_error, write_lock_error};

pub struct PreferenceRepository {
    slots: Arc<dyn SlotStore>,
    theme: RwLock<ThemeMode>,
}

impl PreferenceRepository {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self {
            slots,
            theme: RwLock::new(ThemeMode::default()),
        }
    }

    /// Hydrate from the slot; `false` when the slot has never been written
    pub fn load(&self) -> Result<bool, DepensesError> {
        let Some(raw) = self.slots.read(THEME_SLOT)? else {
            return Ok(false);
        };

        let theme: ThemeMode = raw.parse().map_err(|e: String| {
            DepensesError::Storage(format!("Failed to parse slot '{}': {}", THEME_SLOT, e))
        })?;

        *self.theme.write().map_err(write_lock_error)? = theme;
        Ok(true)
    }

    pub fn save(&self) -> Result<(), DepensesError> {
        let theme = *self.theme.read().map_err(read_lock_error)?;
        self.slots.write(THEME_SLOT, theme.as_str())
    }

    pub fn theme(&self) -> Result<ThemeMode, DepensesError> {
        Ok(*self.theme.read().map_err(read_lock_error)?)
    }

    /// Set the theme, returning the previous one
    pub fn set_theme(&self, theme: ThemeMode) -> Result<ThemeMode, DepensesError> {
        let mut current = self.theme.write().map_err(write_lock_error)?;
        Ok(std::mem::replace(&mut *current, theme))
    }
}
