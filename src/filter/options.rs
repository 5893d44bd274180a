//! Filter options: category selector, timeframe, search query, custom range

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DepensesError, DepensesResult};
use crate::models::{fold_accents, Category, Expense};

/// Named date range, evaluated against the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    All,
    Today,
    ThisWeek,
    #[default]
    ThisMonth,
    ThisYear,
    /// Inclusive `[start_date, end_date]` taken from the filter options
    Custom,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::All,
        Timeframe::Today,
        Timeframe::ThisWeek,
        Timeframe::ThisMonth,
        Timeframe::ThisYear,
        Timeframe::Custom,
    ];

    /// Identifier used on the command line and in settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::ThisWeek => "this-week",
            Self::ThisMonth => "this-month",
            Self::ThisYear => "this-year",
            Self::Custom => "custom",
        }
    }

    /// French display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Tous",
            Self::Today => "Aujourd'hui",
            Self::ThisWeek => "Cette semaine",
            Self::ThisMonth => "Ce mois-ci",
            Self::ThisYear => "Cette année",
            Self::Custom => "Personnalisé",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// Accepts the identifier (`this-week`) or the French label
    /// (`Cette semaine`), ignoring case and accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_accents(s.trim());
        Timeframe::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted || fold_accents(t.label()) == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown timeframe '{}'. Valid: all, today, this-week, this-month, this-year, custom",
                    s
                )
            })
    }
}

/// Category selector: every category, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("Toutes"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_accents(s.trim()).as_str() {
            "all" | "toutes" | "tous" => Ok(Self::All),
            _ => s
                .parse::<Category>()
                .map(Self::Only)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Which subset of expenses a screen shows
///
/// Also drives the planned/actual filter: `Planned` keeps only planned
/// expenses, `Expenses` only realized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Dashboard,
    Expenses,
    Planned,
    Budgets,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Expenses => "expenses",
            Self::Planned => "planned",
            Self::Budgets => "budgets",
        }
    }

    /// Whether an expense with this planned flag belongs to the view
    pub fn admits(&self, is_planned: bool) -> bool {
        match self {
            Self::Planned => is_planned,
            Self::Expenses => !is_planned,
            Self::Dashboard | Self::Budgets => true,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_accents(s.trim()).as_str() {
            "dashboard" | "tableau-de-bord" => Ok(Self::Dashboard),
            "expenses" | "depenses" => Ok(Self::Expenses),
            "planned" | "planifiees" => Ok(Self::Planned),
            "budgets" => Ok(Self::Budgets),
            _ => Err(format!(
                "Unknown view '{}'. Valid: dashboard, expenses, planned, budgets",
                s
            )),
        }
    }
}

/// Active filters for the expense view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub category: CategoryFilter,
    pub timeframe: Timeframe,
    /// Case-insensitive substring of the title; empty matches everything
    pub search_query: String,
    /// Only used with [`Timeframe::Custom`]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterOptions {
    /// Reject a custom range whose start is after its end
    pub fn validate(&self) -> DepensesResult<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(DepensesError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }
        Ok(())
    }

    /// Apply the category, search and timeframe predicates to one expense
    pub fn matches(&self, expense: &Expense, today: NaiveDate, week_start: Weekday) -> bool {
        self.category.matches(expense.category)
            && self.matches_search(&expense.title)
            && self.matches_date(expense.date, today, week_start)
    }

    fn matches_search(&self, title: &str) -> bool {
        self.search_query.is_empty()
            || title
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
    }

    fn matches_date(&self, date: NaiveDate, today: NaiveDate, week_start: Weekday) -> bool {
        match self.timeframe {
            Timeframe::All => true,
            Timeframe::Today => date == today,
            Timeframe::ThisWeek => {
                let start = start_of_week(today, week_start);
                date >= start && date <= start + Duration::days(6)
            }
            Timeframe::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            Timeframe::ThisYear => date.year() == today.year(),
            Timeframe::Custom => match (self.start_date, self.end_date) {
                (Some(start), Some(end)) => date >= start && date <= end,
                _ => true,
            },
        }
    }
}

/// First day of the week containing `day`
pub fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + day.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    day - Duration::days(i64::from(offset))
}
