//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

use super::{truncate, DisplayStyle};

const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Titre")]
    title: String,
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Montant")]
    amount: String,
    #[tabled(rename = "Planifié")]
    planned: &'static str,
}

/// Table of expenses followed by a count and total line
pub fn format_expense_list(expenses: &[Expense], style: &DisplayStyle) -> String {
    if expenses.is_empty() {
        return "Aucune dépense trouvée.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short(),
        date: style.date(e.date),
        title: truncate(&e.title, TITLE_WIDTH),
        category: e.category.label().to_string(),
        amount: style.money(e.amount),
        planned: if e.is_planned { "Oui" } else { "Non" },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} dépense(s), total {}",
        table,
        expenses.len(),
        style.money(total)
    )
}

/// Multi-line detail view of one expense
pub fn format_expense_details(expense: &Expense, style: &DisplayStyle) -> String {
    let mut output = String::new();
    output.push_str(&format!("Dépense : {}\n", expense.title));
    output.push_str(&format!("  ID :        {}\n", expense.id.as_uuid()));
    output.push_str(&format!("  Montant :   {}\n", style.money(expense.amount)));
    output.push_str(&format!("  Catégorie : {}\n", expense.category));
    output.push_str(&format!("  Date :      {}\n", style.date(expense.date)));
    output.push_str(&format!(
        "  Planifiée : {}",
        if expense.is_planned { "Oui" } else { "Non" }
    ));
    output
}
