//! Spending against per-category budgets

use crate::models::{Budget, Category, Money};

use super::totals::{calculate_percentage, CategoryTotals};

/// One budgeted category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetProgressRow {
    pub category: Category,
    pub spent: Money,
    pub budget: Money,
    /// Rounded percentage of the budget spent; 0 for a zero budget
    pub percentage: i64,
}

impl BudgetProgressRow {
    pub fn is_over_budget(&self) -> bool {
        self.budget.is_positive() && self.spent > self.budget
    }

    /// Amount spent beyond the budget, zero when within it
    pub fn overage(&self) -> Money {
        if self.is_over_budget() {
            self.spent - self.budget
        } else {
            Money::zero()
        }
    }

    pub fn remaining(&self) -> Money {
        if self.is_over_budget() {
            Money::zero()
        } else {
            self.budget - self.spent
        }
    }
}

/// Progress for every budgeted category plus the categories without one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetProgressReport {
    /// In display order
    pub rows: Vec<BudgetProgressRow>,
    pub unbudgeted: Vec<Category>,
}

impl BudgetProgressReport {
    /// Match `budgets` against the spending in `totals`
    pub fn generate(budgets: &[Budget], totals: &CategoryTotals) -> Self {
        let mut rows = Vec::new();
        let mut unbudgeted = Vec::new();

        for category in Category::ALL {
            match budgets.iter().find(|b| b.category == category) {
                Some(budget) => {
                    let spent = totals.get(&category).copied().unwrap_or_default();
                    rows.push(BudgetProgressRow {
                        category,
                        spent,
                        budget: budget.amount,
                        percentage: calculate_percentage(spent, budget.amount),
                    });
                }
                None => unbudgeted.push(category),
            }
        }

        Self { rows, unbudgeted }
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetProgressRow> {
        self.rows.iter().filter(|r| r.is_over_budget())
    }

    pub fn total_budget(&self) -> Money {
        self.rows.iter().map(|r| r.budget).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.rows.iter().map(|r| r.spent).sum()
    }
}
