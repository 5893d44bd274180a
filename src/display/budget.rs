//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Budget;
use crate::reports::BudgetProgressReport;

use super::{format_bar, DisplayStyle};

const BAR_WIDTH: usize = 10;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Budget")]
    amount: String,
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Dépensé")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Statut")]
    status: String,
}

pub fn format_budget_list(budgets: &[Budget], style: &DisplayStyle) -> String {
    if budgets.is_empty() {
        return "Aucun budget défini.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        category: b.category.label().to_string(),
        amount: style.money(b.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Progress table, then the categories that have no budget
pub fn format_budget_progress(report: &BudgetProgressReport, style: &DisplayStyle) -> String {
    let mut output = String::new();

    if report.rows.is_empty() {
        output.push_str("Aucun budget défini.");
    } else {
        let rows = report.rows.iter().map(|r| ProgressRow {
            category: r.category.label().to_string(),
            spent: style.money(r.spent),
            budget: style.money(r.budget),
            percentage: format!("{}%", r.percentage),
            bar: format_bar(r.percentage as f64, 100.0, BAR_WIDTH),
            status: if r.is_over_budget() {
                format!("Dépassé de {}", style.money(r.overage()))
            } else {
                format!("Reste {}", style.money(r.remaining()))
            },
        });

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output.push_str(&table.to_string());
    }

    if !report.unbudgeted.is_empty() {
        let names: Vec<&str> = report.unbudgeted.iter().map(|c| c.label()).collect();
        output.push_str(&format!("\nSans budget : {}", names.join(", ")));
    }

    output
}
