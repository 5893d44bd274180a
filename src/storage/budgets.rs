//! Budget repository
//!
//! Persists the per-category budgets as a JSON array in the `budgets` slot.
//! Upserts keep the one-budget-per-category invariant.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::DepensesError;
use crate::models::{Budget, Category};

use super::slots::{SlotStore, BUDGETS_SLOT};
use super::{read_lock_error, write_lock_error};

/// Repository for budget persistence
pub struct BudgetRepository {
    slots: Arc<dyn SlotStore>,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self {
            slots,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Hydrate from the slot; `false` when the slot has never been written
    ///
    /// Duplicate categories in stored data collapse to the last entry, at
    /// the position of the first.
    pub fn load(&self) -> Result<bool, DepensesError> {
        let Some(raw) = self.slots.read(BUDGETS_SLOT)? else {
            return Ok(false);
        };

        let stored: Vec<Budget> = serde_json::from_str(&raw).map_err(|e| {
            DepensesError::Storage(format!("Failed to parse slot '{}': {}", BUDGETS_SLOT, e))
        })?;
        for (index, budget) in stored.iter().enumerate() {
            budget.validate().map_err(|e| {
                DepensesError::Storage(format!(
                    "Invalid record {} in slot '{}': {}",
                    index, BUDGETS_SLOT, e
                ))
            })?;
        }

        let mut budgets: Vec<Budget> = Vec::with_capacity(stored.len());
        for budget in stored {
            upsert_into(&mut budgets, budget);
        }

        debug!(count = budgets.len(), "loaded budgets");
        *self.data.write().map_err(write_lock_error)? = budgets;
        Ok(true)
    }

    pub fn save(&self) -> Result<(), DepensesError> {
        let data = self.data.read().map_err(read_lock_error)?;
        let json = serde_json::to_string(&*data).map_err(|e| {
            DepensesError::Storage(format!("Failed to serialize budgets: {}", e))
        })?;
        self.slots.write(BUDGETS_SLOT, &json)
    }

    pub fn get_all(&self) -> Result<Vec<Budget>, DepensesError> {
        Ok(self.data.read().map_err(read_lock_error)?.clone())
    }

    pub fn get(&self, category: Category) -> Result<Option<Budget>, DepensesError> {
        let data = self.data.read().map_err(read_lock_error)?;
        Ok(data.iter().find(|b| b.category == category).cloned())
    }

    /// Insert or replace the budget for its category
    ///
    /// An existing budget is replaced in place; a new one is appended.
    /// Returns the replaced budget, if any.
    pub fn upsert(&self, budget: Budget) -> Result<Option<Budget>, DepensesError> {
        let mut data = self.data.write().map_err(write_lock_error)?;
        Ok(upsert_into(&mut data, budget))
    }

    pub fn replace_all(&self, budgets: Vec<Budget>) -> Result<(), DepensesError> {
        let mut deduped = Vec::with_capacity(budgets.len());
        for budget in budgets {
            upsert_into(&mut deduped, budget);
        }
        *self.data.write().map_err(write_lock_error)? = deduped;
        Ok(())
    }

    pub fn count(&self) -> Result<usize, DepensesError> {
        Ok(self.data.read().map_err(read_lock_error)?.len())
    }
}

fn upsert_into(budgets: &mut Vec<Budget>, budget: Budget) -> Option<Budget> {
    match budgets.iter_mut().find(|b| b.category == budget.category) {
        Some(existing) => Some(std::mem::replace(existing, budget)),
        None => {
            budgets.push(budget);
            None
        }
    }
}
