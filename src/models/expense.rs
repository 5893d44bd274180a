//! Expense model
//!
//! A realized or planned spend. Field names on disk follow the camelCase
//! layout of the `expenses` slot (`isPlanned`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded or planned expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned at creation
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent (never negative)
    pub amount: Money,

    pub category: Category,

    /// Calendar date, no time component
    pub date: NaiveDate,

    /// True for a future expense that has not happened yet
    #[serde(default)]
    pub is_planned: bool,
}

/// An expense payload before it has been given an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_planned: bool,
}

impl NewExpense {
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date,
            is_planned: false,
        }
    }

    /// Mark the payload as a planned (future) expense
    pub fn planned(mut self) -> Self {
        self.is_planned = true;
        self
    }

    /// Check the invariants an expense must satisfy before it is stored
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.title, self.amount)
    }

    /// Attach a freshly generated id
    pub fn into_expense(self) -> Expense {
        self.with_id(ExpenseId::new())
    }

    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
            is_planned: self.is_planned,
        }
    }
}

impl Expense {
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.title, self.amount)
    }
}

fn validate_fields(title: &str, amount: Money) -> Result<(), ExpenseValidationError> {
    if title.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyTitle);
    }
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount,
            self.category
        )?;
        if self.is_planned {
            write!(f, " [planned]")?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
