//! Terminal output formatting
//!
//! Lists are rendered as `tabled` tables; single records and report headers
//! are formatted by hand.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_budget_list, format_budget_progress};
pub use expense::{format_expense_details, format_expense_list};
pub use report::{format_category_breakdown, format_monthly_totals, format_overview};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// Currency and date conventions for output
#[derive(Debug, Clone)]
pub struct DisplayStyle {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl DisplayStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

/// A `width`-cell bar, filled in proportion to `value / max`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
