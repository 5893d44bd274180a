//! Export CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::error::{DepensesError, DepensesResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{today, ViewArgs};

/// Full export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    /// Human-readable
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the current view as CSV
    Csv {
        /// Output file ("-" for stdout, same bytes as the file, no trailing
        /// newline); defaults to the configured file name
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Export every expense, budget and preference
    All {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> DepensesResult<()> {
    match cmd {
        ExportCommands::Csv { output, view } => {
            let state = view.to_view_state(settings)?;
            let expenses =
                ExpenseService::new(storage).view(&state, today(), settings.week_start())?;

            let output = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
            if output.as_os_str() == "-" {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                export_expenses_csv(&expenses, &mut handle)?;
                handle
                    .flush()
                    .map_err(|e| DepensesError::Export(e.to_string()))?;
            } else {
                let mut writer = create_writer(&output)?;
                export_expenses_csv(&expenses, &mut writer)?;
                writer
                    .flush()
                    .map_err(|e| DepensesError::Export(e.to_string()))?;
                println!("{} dépense(s) exportée(s) vers {}", expenses.len(), output.display());
            }
        }

        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_writer(&output)?;
            match format {
                ExportFormat::Json => export_full_json(storage, &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| DepensesError::Export(e.to_string()))?;
            println!("Export complet écrit dans {}", output.display());
        }
    }

    Ok(())
}

fn create_writer(path: &PathBuf) -> DepensesResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        DepensesError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
