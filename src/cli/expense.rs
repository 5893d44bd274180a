//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, DisplayStyle};
use crate::error::{DepensesError, DepensesResult};
use crate::models::NewExpense;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_amount, parse_category, parse_date, today, ViewArgs};

#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g. "60", "85,50")
        amount: String,
        /// Category (e.g. "Transport", "charges-fixes")
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD or DD/MM/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as a planned future expense
        #[arg(long)]
        planned: bool,
    },
    /// Change fields of an existing expense
    Edit {
        /// Expense ID (or the short id shown in listings)
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as planned
        #[arg(long, conflicts_with = "actual")]
        planned: bool,
        /// Mark as realized
        #[arg(long)]
        actual: bool,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (or short id)
        id: String,
    },
    /// List expenses through the active filters
    List {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show one expense
    Show {
        /// Expense ID (or short id)
        id: String,
    },
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> DepensesResult<()> {
    let service = ExpenseService::new(storage);
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
            planned,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today(),
            };
            let mut data =
                NewExpense::new(title, parse_amount(&amount)?, parse_category(&category)?, date);
            data.is_planned = planned;

            let expense = service.add(data)?;
            println!("Dépense ajoutée : {}", expense.id);
            println!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
            planned,
            actual,
        } => {
            let mut expense = service.resolve(&id)?;
            if let Some(title) = title {
                expense.title = title;
            }
            if let Some(amount) = amount {
                expense.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                expense.category = parse_category(&category)?;
            }
            if let Some(date) = date {
                expense.date = parse_date(&date)?;
            }
            if planned {
                expense.is_planned = true;
            } else if actual {
                expense.is_planned = false;
            }

            let expense_id = expense.id;
            if !service.update(expense.clone())? {
                return Err(DepensesError::expense_not_found(expense_id.to_string()));
            }
            println!("Dépense modifiée : {}", expense_id);
            println!("{}", format_expense_details(&expense, &style));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.resolve(&id)?;
            if !service.delete(expense.id)? {
                return Err(DepensesError::expense_not_found(id));
            }
            println!("Dépense supprimée : {} ({})", expense.title, expense.id);
        }

        ExpenseCommands::List { view } => {
            let state = view.to_view_state(settings)?;
            let expenses = service.view(&state, today(), settings.week_start())?;
            println!("{}", format_expense_list(&expenses, &style));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.resolve(&id)?;
            println!("{}", format_expense_details(&expense, &style));
        }
    }

    Ok(())
}
