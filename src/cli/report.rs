//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_category_breakdown, format_monthly_totals, format_overview, DisplayStyle,
};
use crate::error::DepensesResult;
use crate::reports::{monthly_totals, recent_months, Overview, TREND_MONTHS};
use crate::storage::Storage;

use super::{today, ViewArgs};

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals, top categories and the monthly trend
    Overview {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Totals per month over every expense
    Monthly {
        /// Number of most recent months to show
        #[arg(short, long, default_value_t = TREND_MONTHS)]
        months: usize,
        /// Show every month
        #[arg(long)]
        all: bool,
    },
    /// Totals per category for the current view
    Categories {
        #[command(flatten)]
        view: ViewArgs,
    },
}

pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> DepensesResult<()> {
    let style = DisplayStyle::from_settings(settings);

    match cmd {
        ReportCommands::Overview { view } => {
            let state = view.to_view_state(settings)?;
            let overview = Overview::generate(storage, &state, today(), settings.week_start())?;
            println!("{}", format_overview(&overview, &style));
        }

        ReportCommands::Monthly { months, all } => {
            let totals = monthly_totals(&storage.expenses.get_all()?);
            let count = if all { totals.len() } else { months };
            println!("{}", format_monthly_totals(&recent_months(&totals, count), &style));
        }

        ReportCommands::Categories { view } => {
            let state = view.to_view_state(settings)?;
            let overview = Overview::generate(storage, &state, today(), settings.week_start())?;
            println!(
                "{}",
                format_category_breakdown(&overview.category_totals, overview.total, &style)
            );
        }
    }

    Ok(())
}
