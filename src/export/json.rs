//! Full data export in JSON, with schema versioning

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DepensesError, DepensesResult};
use crate::models::{Budget, Expense, Money, ThemeMode};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the store holds, plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of the application that wrote the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub theme: ThemeMode,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub planned_count: usize,
    pub budget_count: usize,
    pub total_amount: Money,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> DepensesResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let budgets = storage.budgets.get_all()?;
        let theme = storage.preferences.theme()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            planned_count: expenses.iter().filter(|e| e.is_planned).count(),
            budget_count: budgets.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            budgets,
            theme,
            metadata,
        })
    }

    /// Check the export can be restored as-is
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut ids = HashSet::new();
        for expense in &self.expenses {
            if !ids.insert(expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            expense
                .validate()
                .map_err(|e| format!("Expense {}: {}", expense.id, e))?;
        }

        let mut categories = HashSet::new();
        for budget in &self.budgets {
            if !categories.insert(budget.category) {
                return Err(format!("Duplicate budget for category {}", budget.category));
            }
            budget
                .validate()
                .map_err(|e| format!("Budget {}: {}", budget.category, e))?;
        }

        Ok(())
    }
}

/// Write the full store as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> DepensesResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| DepensesError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> DepensesResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| DepensesError::Import(e.to_string()))?;
    export.validate().map_err(DepensesError::Import)?;
    Ok(export)
}
