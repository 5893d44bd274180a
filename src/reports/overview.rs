//! Dashboard overview: the view and its derived totals in one pass

use chrono::{NaiveDate, Weekday};

use crate::error::DepensesResult;
use crate::filter::{apply_view, ViewState};
use crate::models::{Category, Expense, Money};
use crate::storage::Storage;

use super::budget_progress::BudgetProgressReport;
use super::monthly::{monthly_totals, recent_months, MonthKey, MonthlyTotals};
use super::totals::{category_totals, top_categories, total, CategoryTotals};

/// Months shown in the spending trend
pub const TREND_MONTHS: usize = 6;
/// Categories highlighted on the dashboard
pub const TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone)]
pub struct Overview {
    /// Filtered and sorted expenses
    pub expenses: Vec<Expense>,
    pub total: Money,
    pub category_totals: CategoryTotals,
    /// Over the whole collection, not the filtered view
    pub monthly_totals: MonthlyTotals,
}

impl Overview {
    pub fn compute(
        all_expenses: &[Expense],
        state: &ViewState,
        today: NaiveDate,
        week_start: Weekday,
    ) -> Self {
        let expenses = apply_view(all_expenses, state, today, week_start);
        Self {
            total: total(&expenses),
            category_totals: category_totals(&expenses),
            monthly_totals: monthly_totals(all_expenses),
            expenses,
        }
    }

    /// Compute from the current store contents
    pub fn generate(
        storage: &Storage,
        state: &ViewState,
        today: NaiveDate,
        week_start: Weekday,
    ) -> DepensesResult<Self> {
        let all = storage.expenses.get_all()?;
        Ok(Self::compute(&all, state, today, week_start))
    }

    pub fn trend(&self) -> Vec<(MonthKey, Money)> {
        recent_months(&self.monthly_totals, TREND_MONTHS)
    }

    pub fn top_categories(&self) -> Vec<(Category, Money)> {
        top_categories(&self.category_totals, TOP_CATEGORIES)
    }

    pub fn planned_count(&self) -> usize {
        self.expenses.iter().filter(|e| e.is_planned).count()
    }

    /// Budget progress for the spending in this view
    pub fn budget_progress(&self, storage: &Storage) -> DepensesResult<BudgetProgressReport> {
        let budgets = storage.budgets.get_all()?;
        Ok(BudgetProgressReport::generate(&budgets, &self.category_totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterOptions, SortOptions, Timeframe, ViewMode};
    use crate::models::NewExpense;
    use crate::storage::MemorySlotStore;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_totals_ignore_filters() {
        let expenses = vec![
            NewExpense::new("Bus", Money::from_cents(10000), Category::Transport, date(2024, 1, 10))
                .into_expense(),
            NewExpense::new("Taxi", Money::from_cents(5000), Category::Transport, date(2024, 1, 15))
                .planned()
                .into_expense(),
        ];
        let filter = FilterOptions {
            timeframe: Timeframe::All,
            ..Default::default()
        };
        let state = ViewState::new(ViewMode::Expenses, filter, SortOptions::default());

        let overview = Overview::compute(&expenses, &state, date(2024, 6, 1), Weekday::Sun);
        assert_eq!(overview.expenses.len(), 1);
        assert_eq!(overview.total, Money::from_cents(10000));
        assert_eq!(overview.category_totals[&Category::Transport], Money::from_cents(10000));
        assert_eq!(overview.monthly_totals[&MonthKey::new(2024, 1)], Money::from_cents(15000));
        assert_eq!(overview.planned_count(), 0);
    }

    #[test]
    fn test_generate_from_seeded_store() {
        let today = date(2024, 6, 15);
        let storage = Storage::open(Arc::new(MemorySlotStore::new()), today).unwrap();
        let filter = FilterOptions {
            timeframe: Timeframe::All,
            ..Default::default()
        };
        let state = ViewState::new(ViewMode::Dashboard, filter, SortOptions::default());

        let overview = Overview::generate(&storage, &state, today, Weekday::Sun).unwrap();
        assert_eq!(overview.expenses.len(), 13);
        assert_eq!(overview.top_categories()[0].0, Category::Logement);
        assert!(overview.trend().len() <= TREND_MONTHS);

        let progress = overview.budget_progress(&storage).unwrap();
        assert_eq!(progress.rows.len(), 10);
        assert!(progress.unbudgeted.is_empty());
    }
}
