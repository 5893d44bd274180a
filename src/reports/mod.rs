//! Aggregations over expense views
//!
//! Grand total, per-category and per-month totals, budget progress and the
//! combined dashboard overview. All functions are pure over their inputs.

pub mod budget_progress;
pub mod monthly;
pub mod overview;
pub mod totals;

pub use budget_progress::{BudgetProgressReport, BudgetProgressRow};
pub use monthly::{monthly_totals, recent_months, MonthKey, MonthlyTotals};
pub use overview::{Overview, TOP_CATEGORIES, TREND_MONTHS};
pub use totals::{calculate_percentage, category_totals, share_of, top_categories, total, CategoryTotals};
