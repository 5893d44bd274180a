//! Derived expense views
//!
//! A view is a pure function of the expense collection, the [`ViewState`]
//! (view mode, filters, sort) and the evaluation date. Nothing is cached:
//! callers recompute the view whenever an input changes.

pub mod options;
pub mod sort;

pub use options::{start_of_week, CategoryFilter, FilterOptions, Timeframe, ViewMode};
pub use sort::{SortDirection, SortField, SortOptions};

use chrono::{NaiveDate, Weekday};

use crate::models::Expense;

/// Everything that shapes the current view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub filter: FilterOptions,
    pub sort: SortOptions,
}

impl ViewState {
    pub fn new(view_mode: ViewMode, filter: FilterOptions, sort: SortOptions) -> Self {
        Self {
            view_mode,
            filter,
            sort,
        }
    }
}

/// Filter and sort `expenses` for display
///
/// Keeps the expenses admitted by the view mode and matching every filter,
/// then sorts them stably so ties keep their collection order.
pub fn apply_view(
    expenses: &[Expense],
    state: &ViewState,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<Expense> {
    let mut view: Vec<Expense> = expenses
        .iter()
        .filter(|e| state.view_mode.admits(e.is_planned))
        .filter(|e| state.filter.matches(e, today, week_start))
        .cloned()
        .collect();

    view.sort_by(|a, b| state.sort.compare(a, b));
    view
}
