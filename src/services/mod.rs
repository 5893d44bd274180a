//! Business logic layer
//!
//! Services borrow the [`Storage`](crate::storage::Storage), validate their
//! input, write changes through and append to the audit log.

pub mod budget;
pub mod expense;
pub mod import;
pub mod theme;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use import::{ImportResult, ImportService, RestoreResult};
pub use theme::ThemeService;
