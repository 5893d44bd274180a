//! Budget model
//!
//! A spending ceiling for one category. The budget collection holds at most
//! one entry per category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A spending ceiling configured for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: Category,
    pub amount: Money,
}

impl Budget {
    pub fn new(category: Category, amount: Money) -> Self {
        Self { category, amount }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_valid() {
        assert!(Budget::new(Category::Divers, Money::zero()).validate().is_ok());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let budget = Budget::new(Category::Divers, Money::from_cents(-100));
        assert_eq!(budget.validate(), Err(BudgetValidationError::NegativeBudget));
    }

    #[test]
    fn test_slot_layout() {
        let budget = Budget::new(Category::Sante, Money::from_cents(8000));
        let json = serde_json::to_string(&budget).unwrap();
        assert_eq!(json, r#"{"category":"Santé","amount":80}"#);
    }
}
