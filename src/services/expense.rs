//! Expense service
//!
//! Validates payloads, writes through to the store and records every
//! change in the audit log.

use chrono::{NaiveDate, Weekday};
use tracing::{debug, info};

use crate::audit::{generate_diff, AuditAction};
use crate::error::{DepensesError, DepensesResult};
use crate::filter::{apply_view, ViewState};
use crate::models::{Expense, ExpenseId, NewExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense under a fresh id
    pub fn add(&self, mut data: NewExpense) -> DepensesResult<Expense> {
        data.title = data.title.trim().to_string();
        data.validate()
            .map_err(|e| DepensesError::Validation(e.to_string()))?;

        let expense = data.into_expense();
        self.storage.expenses.push(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.record(AuditAction::ExpenseAdded {
            expense: expense.clone(),
        });

        info!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// Replace the stored expense with the same id
    ///
    /// Returns `false` and changes nothing when no expense has that id.
    pub fn update(&self, mut expense: Expense) -> DepensesResult<bool> {
        expense.title = expense.title.trim().to_string();
        expense
            .validate()
            .map_err(|e| DepensesError::Validation(e.to_string()))?;

        let Some(before) = self.storage.expenses.replace(expense.clone())? else {
            debug!(id = %expense.id, "update of unknown expense ignored");
            return Ok(false);
        };
        self.storage.expenses.save()?;

        let changes = match (serde_json::to_value(&before), serde_json::to_value(&expense)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.storage.record(AuditAction::ExpenseEdited {
            before,
            after: expense.clone(),
            changes,
        });

        info!(id = %expense.id, "expense updated");
        Ok(true)
    }

    /// Remove an expense; `false` when it did not exist
    pub fn delete(&self, id: ExpenseId) -> DepensesResult<bool> {
        let Some(removed) = self.storage.expenses.delete(id)? else {
            debug!(id = %id, "delete of unknown expense ignored");
            return Ok(false);
        };
        self.storage.expenses.save()?;

        self.storage.record(AuditAction::ExpenseDeleted { expense: removed });

        info!(id = %id, "expense deleted");
        Ok(true)
    }

    pub fn get(&self, id: ExpenseId) -> DepensesResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> DepensesResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Look up an expense by full id or short id prefix
    ///
    /// A prefix shared by several expenses is a validation error.
    pub fn find(&self, identifier: &str) -> DepensesResult<Option<Expense>> {
        let mut matches = self.storage.expenses.find(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(DepensesError::Validation(format!(
                "Identifier '{}' matches {} expenses, use more characters",
                identifier, n
            ))),
        }
    }

    /// Like [`find`](Self::find), with a miss reported as `NotFound`
    pub fn resolve(&self, identifier: &str) -> DepensesResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| DepensesError::expense_not_found(identifier))
    }

    /// The filtered, sorted view of the store
    pub fn view(
        &self,
        state: &ViewState,
        today: NaiveDate,
        week_start: Weekday,
    ) -> DepensesResult<Vec<Expense>> {
        state.filter.validate()?;
        let all = self.storage.expenses.get_all()?;
        Ok(apply_view(&all, state, today, week_start))
    }
}
