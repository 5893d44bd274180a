//! Spending per calendar month

use chrono::Datelike;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Expense, Money};

/// A calendar month; orders chronologically, displays as `M/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: impl Datelike) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

pub type MonthlyTotals = BTreeMap<MonthKey, Money>;

/// Totals per month over the whole collection
///
/// Takes every expense (planned ones included) regardless of the active
/// filters; only months with at least one expense appear.
pub fn monthly_totals(expenses: &[Expense]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();
    for expense in expenses {
        *totals.entry(MonthKey::of(expense.date)).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// The last `n` months present in `totals`, oldest first
pub fn recent_months(totals: &MonthlyTotals, n: usize) -> Vec<(MonthKey, Money)> {
    let skip = totals.len().saturating_sub(n);
    totals.iter().skip(skip).map(|(k, v)| (*k, *v)).collect()
}
