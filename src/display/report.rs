//! Report formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{share_of, CategoryTotals, MonthKey, Overview};

use super::{format_bar, DisplayStyle};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Mois")]
    month: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Part")]
    share: String,
}

/// Monthly totals, oldest first, with a bar scaled to the largest month
pub fn format_monthly_totals(months: &[(MonthKey, Money)], style: &DisplayStyle) -> String {
    if months.is_empty() {
        return "Aucune dépense enregistrée.".to_string();
    }

    let max = months.iter().map(|(_, m)| m.to_f64()).fold(0.0, f64::max);
    let rows = months.iter().map(|(key, total)| MonthRow {
        month: key.to_string(),
        total: style.money(*total),
        bar: format_bar(total.to_f64(), max, BAR_WIDTH),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Every category with its total and share of `total`
pub fn format_category_breakdown(
    totals: &CategoryTotals,
    total: Money,
    style: &DisplayStyle,
) -> String {
    let rows = totals.iter().map(|(category, amount)| CategoryRow {
        category: category.label().to_string(),
        total: style.money(*amount),
        share: format!("{:.1}%", share_of(*amount, total)),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\nTotal : {}", table, style.money(total))
}

/// Dashboard summary: totals, top categories and the recent trend
pub fn format_overview(overview: &Overview, style: &DisplayStyle) -> String {
    let mut output = String::new();
    output.push_str("Tableau de bord\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("Total des dépenses : {}\n", style.money(overview.total)));
    output.push_str(&format!(
        "Nombre de dépenses : {} (dont {} planifiée(s))\n",
        overview.expenses.len(),
        overview.planned_count()
    ));

    let top = overview.top_categories();
    if !top.is_empty() {
        output.push_str("\nPrincipales catégories :\n");
        for (rank, (category, amount)) in top.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {} ({:.0}%)\n",
                rank + 1,
                category,
                style.money(*amount),
                share_of(*amount, overview.total)
            ));
        }
    }

    output.push_str("\nTendance mensuelle :\n");
    output.push_str(&format_monthly_totals(&overview.trend(), style));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterOptions, SortOptions, Timeframe, ViewMode, ViewState};
    use crate::models::{Category, NewExpense};
    use crate::reports::{category_totals, total};
    use chrono::{NaiveDate, Weekday};

    fn expenses() -> Vec<crate::models::Expense> {
        vec![
            NewExpense::new(
                "Loyer",
                Money::from_cents(75000),
                Category::Logement,
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            )
            .into_expense(),
            NewExpense::new(
                "Essence",
                Money::from_cents(6000),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            )
            .into_expense(),
        ]
    }

    #[test]
    fn test_monthly_table() {
        let months = vec![
            (MonthKey::new(2024, 2), Money::from_cents(75000)),
            (MonthKey::new(2024, 3), Money::from_cents(6000)),
        ];
        let out = format_monthly_totals(&months, &DisplayStyle::default());
        assert!(out.contains("2/2024"));
        assert!(out.contains("750,00 €"));
        assert!(out.find("2/2024").unwrap() < out.find("3/2024").unwrap());
    }

    #[test]
    fn test_category_breakdown_lists_all() {
        let expenses = expenses();
        let totals = category_totals(&expenses);
        let out = format_category_breakdown(&totals, total(&expenses), &DisplayStyle::default());

        assert!(out.contains("Santé"));
        assert!(out.ends_with("Total : 810,00 €"));
    }

    #[test]
    fn test_overview() {
        let filter = FilterOptions {
            timeframe: Timeframe::All,
            ..Default::default()
        };
        let state = ViewState::new(ViewMode::Dashboard, filter, SortOptions::default());
        let overview = Overview::compute(
            &expenses(),
            &state,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            Weekday::Sun,
        );

        let out = format_overview(&overview, &DisplayStyle::default());
        assert!(out.contains("Total des dépenses : 810,00 €"));
        assert!(out.contains("1. Logement"));
        assert!(out.contains("3/2024"));
    }
}
