//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Arguments arrive
//! as strings and are parsed here so that errors carry the offending value.

pub mod budget;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;
pub mod theme;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use import::{handle_import_command, ImportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use theme::{handle_theme_command, ThemeCommands};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::error::{DepensesError, DepensesResult};
use crate::filter::{
    CategoryFilter, FilterOptions, SortDirection, SortField, SortOptions, Timeframe, ViewMode,
    ViewState,
};
use crate::models::{Category, Money};

/// Date layouts accepted on the command line
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Filters and sort shared by every command that shows a view
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// View: dashboard, expenses (realized only), planned, budgets
    #[arg(long, default_value = "dashboard")]
    pub view: String,

    /// Category to keep ("all" for every category)
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// all, today, this-week, this-month, this-year, custom
    #[arg(short, long)]
    pub timeframe: Option<String>,

    /// Case-insensitive text to look for in titles
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start of a custom range (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub from: Option<String>,

    /// End of a custom range (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub to: Option<String>,

    /// Sort field: title, amount, category, date
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort ascending
    #[arg(long)]
    pub asc: bool,
}

impl ViewArgs {
    /// Build the view state, falling back to the configured timeframe
    ///
    /// Giving `--from`/`--to` without `--timeframe` selects a custom range.
    pub fn to_view_state(&self, settings: &Settings) -> DepensesResult<ViewState> {
        let view_mode: ViewMode = self.view.parse().map_err(DepensesError::Parse)?;

        let category = match &self.category {
            Some(c) => c.parse::<CategoryFilter>().map_err(DepensesError::Parse)?,
            None => CategoryFilter::All,
        };

        let start_date = self.from.as_deref().map(parse_date).transpose()?;
        let end_date = self.to.as_deref().map(parse_date).transpose()?;

        let timeframe = match &self.timeframe {
            Some(t) => t.parse::<Timeframe>().map_err(DepensesError::Parse)?,
            None if start_date.is_some() || end_date.is_some() => Timeframe::Custom,
            None => settings.default_timeframe,
        };

        let mut sort = match &self.sort {
            Some(field) => SortOptions::new(
                field.parse::<SortField>().map_err(DepensesError::Parse)?,
                SortDirection::Asc,
            ),
            None => SortOptions::default(),
        };
        if self.desc {
            sort.direction = SortDirection::Desc;
        } else if self.asc {
            sort.direction = SortDirection::Asc;
        }

        let filter = FilterOptions {
            category,
            timeframe,
            search_query: self.search.clone().unwrap_or_default(),
            start_date,
            end_date,
        };
        filter.validate()?;

        Ok(ViewState::new(view_mode, filter, sort))
    }
}

/// The current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> DepensesResult<NaiveDate> {
    let s = s.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| {
            DepensesError::Parse(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or DD/MM/YYYY",
                s
            ))
        })
}

pub fn parse_amount(s: &str) -> DepensesResult<Money> {
    Money::parse(s).map_err(|e| DepensesError::Parse(e.to_string()))
}

pub fn parse_category(s: &str) -> DepensesResult<Category> {
    s.parse::<Category>()
        .map_err(|e| DepensesError::Parse(e.to_string()))
}
