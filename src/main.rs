use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use piggybank::cli::{handle_ledger_command, run_interactive, LedgerCommands};
use piggybank::config::paths::DATA_DIR_ENV;
use piggybank::config::{AppConfig, PiggyPaths};
use piggybank::display::error_message;
use piggybank::logging;
use piggybank::services::{LedgerService, PreferencesService};
use piggybank::storage::Storage;
use piggybank::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "piggybank",
    version,
    about = "Keep track of the money in your piggy bank",
    long_about = "Piggybank keeps a running balance, logs every deposit and \
                  withdrawal, and remembers your language, currency and theme. \
                  Without a command it opens the terminal window; with --cli it \
                  runs a numbered text menu."
)]
struct Cli {
    /// Use the text menu instead of the terminal window
    #[arg(long)]
    cli: bool,

    /// Directory holding balance, settings and logs
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Reject zero and negative amounts
    #[arg(long)]
    strict_amounts: bool,

    /// Records per log in history views
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PiggyPaths::with_base_dir(dir),
        None => PiggyPaths::new()?,
    };
    let mut config = AppConfig::new(paths.clone()).strict_amounts(cli.strict_amounts);
    if let Some(limit) = cli.history_limit {
        config = config.history_limit(limit);
    }

    let storage = Storage::new(paths.clone())?;
    if let Err(e) = logging::init(&paths) {
        eprintln!("Warning: tracing disabled: {}", e);
    }
    tracing::info!(data_dir = %paths.base_dir().display(), "starting");

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let mut ledger = LedgerService::open(&storage, &config);
            let prefs = PreferencesService::load(&storage);

            if let Err(err) = handle_ledger_command(&mut ledger, &prefs, config.history_limit, cmd)
            {
                if err.is_user_error() {
                    eprintln!("{}", error_message(&err, &prefs.language()));
                    return Ok(ExitCode::FAILURE);
                }
                return Err(err.into());
            }
        }
        Some(Commands::Config) => {
            let settings = PreferencesService::load(&storage).settings().clone();
            println!("Piggybank Configuration");
            println!("=======================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Balance file:     {}", paths.balance_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Deposits log:     {}", paths.deposits_file().display());
            println!("Withdrawals log:  {}", paths.withdrawals_file().display());
            println!("Trace log:        {}", paths.trace_file().display());
            println!();
            println!("Settings:");
            println!("  Language:    {}", settings.language);
            println!("  Currency:    {}", settings.currency);
            println!("  Theme:       {}", settings.theme);
            println!("  Window mode: {}", settings.window_mode);
            println!("  Strict amounts: {}", config.strict_amounts);
        }
        None if cli.cli => {
            let mut ledger = LedgerService::open(&storage, &config);
            let prefs = PreferencesService::load(&storage);
            run_interactive(&mut ledger, &prefs, io::stdin().lock(), io::stdout().lock())?;
        }
        None => run_tui(&storage, &config)?,
    }

    Ok(ExitCode::SUCCESS)
}
