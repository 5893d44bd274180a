//! Audit entries
//!
//! One entry per committed change. Each action carries the records it
//! touched so the log can be replayed or inspected without the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Expense, Money, ThemeMode};

/// What changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditAction {
    ExpenseAdded {
        expense: Expense,
    },
    ExpenseEdited {
        before: Expense,
        after: Expense,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        changes: Option<String>,
    },
    ExpenseDeleted {
        expense: Expense,
    },
    /// Budget upsert; `previous` is `None` when the category had no budget
    BudgetSet {
        category: Category,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous: Option<Money>,
        amount: Money,
    },
    ThemeChanged {
        from: ThemeMode,
        to: ThemeMode,
    },
}

impl AuditAction {
    /// Short French description, as shown by `depenses audit`
    pub fn describe(&self) -> String {
        match self {
            Self::ExpenseAdded { expense } => {
                format!("Dépense ajoutée : {}", summarize(expense))
            }
            Self::ExpenseEdited {
                after, changes, ..
            } => {
                let mut line = format!("Dépense modifiée : {}", summarize(after));
                if let Some(changes) = changes {
                    line.push_str(&format!("\n  Modifications : {}", changes));
                }
                line
            }
            Self::ExpenseDeleted { expense } => {
                format!("Dépense supprimée : {}", summarize(expense))
            }
            Self::BudgetSet {
                category,
                previous: Some(previous),
                amount,
            } => format!("Budget {} : {} -> {}", category, previous, amount),
            Self::BudgetSet {
                category, amount, ..
            } => format!("Budget {} défini : {}", category, amount),
            Self::ThemeChanged { from, to } => format!("Thème : {} -> {}", from, to),
        }
    }
}

fn summarize(expense: &Expense) -> String {
    format!(
        "{} ({}, {}, {}) [{}]",
        expense.title,
        expense.amount,
        expense.category,
        expense.date.format("%d/%m/%Y"),
        expense.id.short()
    )
}

/// A timestamped audit log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
}

impl AuditEntry {
    pub fn new(action: AuditAction) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
        }
    }

    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn essence() -> Expense {
        NewExpense::new(
            "Essence",
            Money::from_cents(6000),
            Category::Transport,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
        .into_expense()
    }

    #[test]
    fn test_expense_added_description() {
        let entry = AuditEntry::new(AuditAction::ExpenseAdded { expense: essence() });
        let text = entry.format_human_readable();
        assert!(text.contains("Dépense ajoutée : Essence (60,00 €, Transport, 05/03/2024)"));
    }

    #[test]
    fn test_budget_set_descriptions() {
        let replaced = AuditAction::BudgetSet {
            category: Category::Transport,
            previous: Some(Money::from_cents(15000)),
            amount: Money::from_cents(20000),
        };
        assert_eq!(replaced.describe(), "Budget Transport : 150,00 € -> 200,00 €");

        let created = AuditAction::BudgetSet {
            category: Category::Sante,
            previous: None,
            amount: Money::from_cents(8000),
        };
        assert_eq!(created.describe(), "Budget Santé défini : 80,00 €");
    }

    #[test]
    fn test_edit_lists_changes() {
        let before = essence();
        let mut after = before.clone();
        after.amount = Money::from_cents(6500);
        let action = AuditAction::ExpenseEdited {
            before,
            after,
            changes: Some("amount: 60 -> 65".into()),
        };
        assert!(action.describe().ends_with("\n  Modifications : amount: 60 -> 65"));
    }

    #[test]
    fn test_json_line_round_trip() {
        let entry = AuditEntry::new(AuditAction::ThemeChanged {
            from: ThemeMode::Light,
            to: ThemeMode::Dark,
        });

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"theme_changed\""));
        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);

        let entry = AuditEntry::new(AuditAction::ExpenseDeleted { expense: essence() });
        let back: AuditEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
        assert_eq!(back, entry);
    }
}
