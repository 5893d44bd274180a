//! Expense repository
//!
//! Holds the expense collection in insertion order and persists it as a
//! JSON array in the `expenses` slot.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::DepensesError;
use crate::models::{Expense, ExpenseId};

use super::slots::{SlotStore, EXPENSES_SLOT};
use super::{read_lock_error, write_lock_error};

/// Repository for expense persistence
pub struct ExpenseRepository {
    slots: Arc<dyn SlotStore>,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self {
            slots,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Hydrate from the slot
    ///
    /// Returns `false` when the slot has never been written, leaving the
    /// collection empty so the caller can seed it. A slot that exists but
    /// does not parse, or holds an invalid expense, is an error.
    pub fn load(&self) -> Result<bool, DepensesError> {
        let Some(raw) = self.slots.read(EXPENSES_SLOT)? else {
            return Ok(false);
        };

        let expenses: Vec<Expense> = serde_json::from_str(&raw).map_err(|e| {
            DepensesError::Storage(format!("Failed to parse slot '{}': {}", EXPENSES_SLOT, e))
        })?;
        for (index, expense) in expenses.iter().enumerate() {
            expense.validate().map_err(|e| {
                DepensesError::Storage(format!(
                    "Invalid record {} in slot '{}': {}",
                    index, EXPENSES_SLOT, e
                ))
            })?;
        }

        debug!(count = expenses.len(), "loaded expenses");
        *self.data.write().map_err(write_lock_error)? = expenses;
        Ok(true)
    }

    /// Write the whole collection to the slot
    pub fn save(&self) -> Result<(), DepensesError> {
        let data = self.data.read().map_err(read_lock_error)?;
        let json = serde_json::to_string(&*data).map_err(|e| {
            DepensesError::Storage(format!("Failed to serialize expenses: {}", e))
        })?;
        self.slots.write(EXPENSES_SLOT, &json)
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, DepensesError> {
        Ok(self.data.read().map_err(read_lock_error)?.clone())
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, DepensesError> {
        let data = self.data.read().map_err(read_lock_error)?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Expenses whose id matches a full UUID or a short id fragment
    pub fn find(&self, fragment: &str) -> Result<Vec<Expense>, DepensesError> {
        let data = self.data.read().map_err(read_lock_error)?;
        Ok(data.iter().filter(|e| e.id.matches(fragment)).cloned().collect())
    }

    /// Append a new expense
    pub fn push(&self, expense: Expense) -> Result<(), DepensesError> {
        self.data.write().map_err(write_lock_error)?.push(expense);
        Ok(())
    }

    /// Replace the expense with the same id, keeping its position
    ///
    /// Returns the previous value, or `None` (and changes nothing) when no
    /// expense has that id.
    pub fn replace(&self, expense: Expense) -> Result<Option<Expense>, DepensesError> {
        let mut data = self.data.write().map_err(write_lock_error)?;
        Ok(data
            .iter_mut()
            .find(|e| e.id == expense.id)
            .map(|slot| std::mem::replace(slot, expense)))
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, DepensesError> {
        let mut data = self.data.write().map_err(write_lock_error)?;
        Ok(data
            .iter()
            .position(|e| e.id == id)
            .map(|index| data.remove(index)))
    }

    /// Replace the whole collection
    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<(), DepensesError> {
        *self.data.write().map_err(write_lock_error)? = expenses;
        Ok(())
    }

    pub fn count(&self) -> Result<usize, DepensesError> {
        Ok(self.data.read().map_err(read_lock_error)?.len())
    }
}
