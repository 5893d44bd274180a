//! First-run sample data
//!
//! Seeds a fresh store so the first listing is never empty: ten recent
//! expenses, three planned ones, and a budget for every category. Dates are
//! relative to the day the store is created.

use chrono::{Duration, NaiveDate};

use crate::models::{Budget, Category, Expense, Money, NewExpense};

const SAMPLE_EXPENSES: &[(&str, i64, Category, i64, bool)] = &[
    ("Courses supermarché", 8550, Category::Alimentation, -2, false),
    ("Abonnement Netflix", 1399, Category::Divertissement, -15, false),
    ("Essence", 6000, Category::Transport, -5, false),
    ("Loyer", 75000, Category::Logement, -20, false),
    ("Restaurant avec amis", 4250, Category::Alimentation, -8, false),
    ("Livres universitaires", 12000, Category::Education, -25, false),
    ("Abonnement salle de sport", 3500, Category::Sante, -10, false),
    ("Facture électricité", 6575, Category::ChargesFixes, -18, false),
    ("Investissement actions", 20000, Category::Investissements, -30, false),
    ("Épargne mensuelle", 15000, Category::Epargne, -1, false),
    ("Impôts locaux", 35000, Category::ChargesFixes, 15, true),
    ("Entretien voiture", 12000, Category::Transport, 10, true),
    ("Anniversaire maman", 5000, Category::Divers, 20, true),
];

const SAMPLE_BUDGETS: [(Category, i64); 10] = [
    (Category::Alimentation, 400),
    (Category::Transport, 150),
    (Category::Logement, 800),
    (Category::Divertissement, 100),
    (Category::Education, 150),
    (Category::Epargne, 200),
    (Category::Investissements, 250),
    (Category::Sante, 80),
    (Category::ChargesFixes, 300),
    (Category::Divers, 100),
];

/// Sample expenses dated relative to `today`, each with a fresh id
pub fn default_expenses(today: NaiveDate) -> Vec<Expense> {
    SAMPLE_EXPENSES
        .iter()
        .map(|&(title, cents, category, offset_days, planned)| {
            let mut payload = NewExpense::new(
                title,
                Money::from_cents(cents),
                category,
                today + Duration::days(offset_days),
            );
            payload.is_planned = planned;
            payload.into_expense()
        })
        .collect()
}

/// One budget per category
pub fn default_budgets() -> Vec<Budget> {
    SAMPLE_BUDGETS
        .iter()
        .map(|&(category, units)| Budget::new(category, Money::from_units_cents(units, 0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_default_expenses() {
        let expenses = default_expenses(today());
        assert_eq!(expenses.len(), 13);
        assert_eq!(expenses.iter().filter(|e| e.is_planned).count(), 3);
        assert!(expenses.iter().all(|e| e.validate().is_ok()));

        // planned expenses are in the future, realized ones are not
        for e in &expenses {
            assert_eq!(e.is_planned, e.date > today());
        }
    }

    #[test]
    fn test_default_ids_unique() {
        let expenses = default_expenses(today());
        let mut ids: Vec<_> = expenses.iter().map(|e| e.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), expenses.len());
    }

    #[test]
    fn test_default_budgets_cover_every_category() {
        let budgets = default_budgets();
        let categories: Vec<_> = budgets.iter().map(|b| b.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(budgets[2].amount.cents(), 80000);
    }
}
