//! Core data models for Mes Dépenses
//!
//! Expenses, budgets, the closed category set, amounts and the persisted
//! theme preference.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod theme;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use theme::ThemeMode;

/// Lowercase `s` and strip French diacritics (`Éducation` -> `education`)
pub fn fold_accents(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars().flat_map(char::to_lowercase) {
        match ch {
            'à' | 'â' | 'ä' | 'á' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'î' | 'ï' | 'í' => out.push('i'),
            'ô' | 'ö' | 'ó' => out.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => out.push('u'),
            'ÿ' => out.push('y'),
            'ç' => out.push('c'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            other => out.push(other),
        }
    }
    out
}
