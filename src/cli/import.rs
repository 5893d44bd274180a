//! Import CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{DepensesError, DepensesResult};
use crate::services::ImportService;
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Add the expenses of a CSV file in the export layout
    Csv {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Replace all data with a JSON or YAML export
    Backup {
        /// Path to the export file
        file: PathBuf,
    },
}

pub fn handle_import_command(storage: &Storage, cmd: ImportCommands) -> DepensesResult<()> {
    let service = ImportService::new(storage);

    match cmd {
        ImportCommands::Csv { file } => {
            let reader = File::open(&file).map_err(|e| {
                DepensesError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let result = service.import_csv(reader)?;

            println!("{} dépense(s) importée(s)", result.imported);
            for (line, reason) in &result.errors {
                eprintln!("  ligne {} ignorée : {}", line, reason);
            }
        }

        ImportCommands::Backup { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                DepensesError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let restored = service.restore_backup(&contents)?;
            println!(
                "Sauvegarde restaurée : {} dépense(s), {} budget(s)",
                restored.expenses, restored.budgets
            );
        }
    }

    Ok(())
}
