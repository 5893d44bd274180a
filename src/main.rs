use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use depenses::audit::AuditLogger;
use depenses::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_import_command,
    handle_report_command, handle_theme_command, today,
};
use depenses::config::{DepensesPaths, Settings};
use depenses::logging::init_tracing;
use depenses::storage::Storage;

#[derive(Parser)]
#[command(
    name = "depenses",
    version,
    about = "Local personal expense tracker",
    long_about = "Mes Dépenses records your expenses, compares them against a \
                  budget per category and exports any view as CSV. All data \
                  stays on this machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(depenses::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(depenses::cli::BudgetCommands),

    /// Reports and aggregations
    #[command(subcommand)]
    Report(depenses::cli::ReportCommands),

    /// Export expenses or a full backup
    #[command(subcommand)]
    Export(depenses::cli::ExportCommands),

    /// Import expenses or restore a backup
    #[command(subcommand)]
    Import(depenses::cli::ImportCommands),

    /// Light / dark theme preference
    #[command(subcommand)]
    Theme(depenses::cli::ThemeCommands),

    /// Discard all data and restore the sample data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = DepensesPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Commands that must work even when stored data no longer parses
    let command = match cli.command {
        Some(Commands::Reset { yes }) => {
            if !yes {
                anyhow::bail!("Reset discards all expenses and budgets; pass --yes to confirm");
            }
            Storage::reset_files(&paths, today())?;
            println!("Données réinitialisées avec les exemples.");
            return Ok(());
        }
        Some(Commands::Audit { count }) => {
            if !settings.audit_enabled {
                println!("Audit logging is disabled in {}", paths.settings_file().display());
                return Ok(());
            }
            let entries = AuditLogger::new(paths.audit_log()).read_recent(count)?;
            if entries.is_empty() {
                println!("Aucune entrée d'audit.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        None => {
            println!("Mes Dépenses - suivi local des dépenses");
            println!();
            println!("Run 'depenses --help' for usage information.");
            println!("Run 'depenses expense list' to see this month's expenses.");
            return Ok(());
        }
        Some(command) => command,
    };

    let mut storage = Storage::open_files(&paths, today())
        .context("Stored data could not be loaded; run 'depenses reset --yes' to restore the samples")?;
    if settings.audit_enabled {
        storage = storage.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match command {
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, &settings, cmd)?,
        Commands::Import(cmd) => handle_import_command(&storage, cmd)?,
        Commands::Theme(cmd) => handle_theme_command(&storage, cmd)?,
        Commands::Reset { .. } | Commands::Audit { .. } | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &DepensesPaths, settings: &Settings) {
    println!("Mes Dépenses Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  First day of week: {}", settings.week_start());
    println!("  Default timeframe: {}", settings.default_timeframe);
    println!("  Export file name:  {}", settings.export_file_name);
    println!("  Audit enabled:     {}", settings.audit_enabled);
}
