//! CSV export of an expense view
//!
//! The layout is the one spreadsheet users already open:
//!
//! ```text
//! Titre,Montant,Catégorie,Date,Planifié
//! "Essence",60,"Transport",05/03/2024,Non
//! ```
//!
//! Rows follow the order of the view, lines are separated by `\n` and the
//! last line has no terminator.

use std::io::Write;

use crate::error::{DepensesError, DepensesResult};
use crate::models::Expense;

/// Default name of the exported file
pub const DEFAULT_EXPORT_FILE: &str = "mes-depenses.csv";

/// Header line of the export
pub const CSV_HEADER: &str = "Titre,Montant,Catégorie,Date,Planifié";

/// Date layout of the `Date` column
pub const CSV_DATE_FORMAT: &str = "%d/%m/%Y";

/// Write `expenses` as CSV, in the given order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> DepensesResult<()> {
    write!(writer, "{}", CSV_HEADER).map_err(|e| DepensesError::Export(e.to_string()))?;

    for expense in expenses {
        write!(writer, "\n{}", format_row(expense))
            .map_err(|e| DepensesError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| DepensesError::Export(e.to_string()))?;
    Ok(())
}

/// The CSV document as a string
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(expenses.iter().map(format_row));
    lines.join("\n")
}

fn format_row(expense: &Expense) -> String {
    format!(
        "{},{},{},{},{}",
        quote(&expense.title),
        expense.amount.to_plain_string(),
        quote(expense.category.label()),
        expense.date.format(CSV_DATE_FORMAT),
        if expense.is_planned { "Oui" } else { "Non" }
    )
}

/// Always quote, doubling embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
