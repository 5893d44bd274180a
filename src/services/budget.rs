//! Budget service

use tracing::info;

use crate::audit::AuditAction;
use crate::error::{DepensesError, DepensesResult};
use crate::models::{Budget, Category};
use crate::storage::Storage;

pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget of a category, replacing any existing one
    ///
    /// Returns the budget that was replaced.
    pub fn set(&self, budget: Budget) -> DepensesResult<Option<Budget>> {
        budget
            .validate()
            .map_err(|e| DepensesError::Validation(e.to_string()))?;

        let previous = self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        self.storage.record(AuditAction::BudgetSet {
            category: budget.category,
            previous: previous.as_ref().map(|b| b.amount),
            amount: budget.amount,
        });

        info!(category = %budget.category, amount = %budget.amount, "budget set");
        Ok(previous)
    }

    /// Budgets in insertion order
    pub fn list(&self) -> DepensesResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    pub fn get(&self, category: Category) -> DepensesResult<Option<Budget>> {
        self.storage.budgets.get(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemorySlotStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn storage() -> Storage {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Storage::open(Arc::new(MemorySlotStore::new()), today).unwrap()
    }

    #[test]
    fn test_set_twice_keeps_one_budget() {
        let storage = storage();
        let service = BudgetService::new(&storage);
        let before = service.list().unwrap().len();

        service.set(Budget::new(Category::Transport, Money::from_cents(20000))).unwrap();
        let previous = service
            .set(Budget::new(Category::Transport, Money::from_cents(25000)))
            .unwrap();

        assert_eq!(previous.unwrap().amount, Money::from_cents(20000));
        let budgets = service.list().unwrap();
        assert_eq!(budgets.len(), before);
        assert_eq!(
            budgets.iter().filter(|b| b.category == Category::Transport).count(),
            1
        );
        assert_eq!(
            service.get(Category::Transport).unwrap().unwrap().amount,
            Money::from_cents(25000)
        );
    }

    #[test]
    fn test_zero_budget_allowed_negative_rejected() {
        let storage = storage();
        let service = BudgetService::new(&storage);

        assert!(service.set(Budget::new(Category::Divers, Money::zero())).is_ok());
        let err = service
            .set(Budget::new(Category::Divers, Money::from_cents(-100)))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(Category::Divers).unwrap().unwrap().amount, Money::zero());
    }
}
