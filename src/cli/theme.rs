//! Theme CLI commands

use clap::Subcommand;

use crate::error::{DepensesError, DepensesResult};
use crate::models::ThemeMode;
use crate::services::ThemeService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme
    Set {
        /// light or dark
        theme: String,
    },
}

pub fn handle_theme_command(storage: &Storage, cmd: ThemeCommands) -> DepensesResult<()> {
    let service = ThemeService::new(storage);

    match cmd {
        ThemeCommands::Show => println!("{}", service.current()?),
        ThemeCommands::Toggle => println!("{}", service.toggle()?),
        ThemeCommands::Set { theme } => {
            let theme: ThemeMode = theme.parse().map_err(DepensesError::Parse)?;
            service.set(theme)?;
            println!("{}", theme);
        }
    }

    Ok(())
}
