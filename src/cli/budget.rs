//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_progress, DisplayStyle};
use crate::error::DepensesResult;
use crate::models::Budget;
use crate::reports::Overview;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, parse_category, today, ViewArgs};

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget of a category (replaces any existing one)
    Set {
        /// Category
        category: String,
        /// Amount (e.g. "150", "80,50")
        amount: String,
    },
    /// List budgets
    List,
    /// Compare spending in the current view against each budget
    Progress {
        #[command(flatten)]
        view: ViewArgs,
    },
}

pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> DepensesResult<()> {
    let service = BudgetService::new(storage);
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let budget = Budget::new(parse_category(&category)?, parse_amount(&amount)?);
            match service.set(budget.clone())? {
                Some(previous) => println!(
                    "Budget {} : {} -> {}",
                    budget.category,
                    style.money(previous.amount),
                    style.money(budget.amount)
                ),
                None => println!(
                    "Budget {} : {}",
                    budget.category,
                    style.money(budget.amount)
                ),
            }
        }

        BudgetCommands::List => {
            println!("{}", format_budget_list(&service.list()?, &style));
        }

        BudgetCommands::Progress { view } => {
            let state = view.to_view_state(settings)?;
            let overview = Overview::generate(storage, &state, today(), settings.week_start())?;
            let report = overview.budget_progress(storage)?;
            println!("{}", format_budget_progress(&report, &style));
        }
    }

    Ok(())
}
