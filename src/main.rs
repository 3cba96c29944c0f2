use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use std::sync::Arc;

mod client;
mod commands;
mod constants;
mod domain;
mod ledger;
mod logging;
mod particles;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    client::{HttpConfig, RecordRepository, RemoteRepository},
    ledger::LedgerView,
    state::{App, AppConfig, AppOptions, AppPaths, ConfigStore},
    theme::Theme,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 ___         _       _   _              _
| _ \___  __| |__ __| |_| |__  ___  ___| |__
|  _/ _ \/ _| / // -_)  _| '_ \/ _ \/ _ \ / /
|_| \___/\__|_\_\\___|\__|_.__/\___/\___/_\_\
";

/// Pocketbook - terminal expense and income tracker
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Spreadsheet web API endpoint for this run
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Theme for this run; the saved preference is left unchanged
    #[arg(long, value_enum, global = true)]
    theme: Option<Theme>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once and print the balance and entries
    List,
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("Pocketbook v{VERSION}");
            println!("A terminal expense and income tracker");
            Ok(())
        }
        Some(Commands::List) => {
            if let Err(error) = logging::init_stderr_logging() {
                eprintln!("Logging disabled: {error}");
            }
            let (config, _) = load_config();
            let repository = build_repository(&config, cli.api_url.as_deref())?;
            print_ledger(repository.as_ref(), &mut io::stdout()).await
        }
        None => {
            init_tui_logging();
            let (config, config_store) = load_config();
            let repository = build_repository(&config, cli.api_url.as_deref())?;
            run_tui(config, config_store, repository, cli.theme).await
        }
    }
}

// ============================================================================
// Startup
// ============================================================================

/// File logging for the TUI. Failure leaves logging off.
fn init_tui_logging() {
    let installed = AppPaths::new()
        .log_file()
        .and_then(|path| logging::init_file_logging(&path));
    if let Err(error) = installed {
        eprintln!("Logging disabled: {error}");
    }
}

/// Loads the saved config. Without a config directory, theme changes last
/// only for this run.
fn load_config() -> (AppConfig, ConfigStore) {
    match ConfigStore::default_location() {
        Ok(store) => (store.load(), store),
        Err(error) => {
            tracing::warn!(%error, "no config directory, preferences will not be saved");
            (AppConfig::default(), ConfigStore::ephemeral())
        }
    }
}

fn build_repository(
    config: &AppConfig,
    api_url: Option<&str>,
) -> Result<Arc<dyn RecordRepository>> {
    let endpoint = api_url.unwrap_or_else(|| config.endpoint());
    let repository = RemoteRepository::new(endpoint, HttpConfig::default())?;
    tracing::info!(endpoint = repository.endpoint(), "using records endpoint");
    Ok(Arc::new(repository))
}

fn particle_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x2545_F491_4F6C_DD1D, |elapsed| elapsed.as_nanos() as u64)
}

// ============================================================================
// Commands
// ============================================================================

/// Fetches once and writes the ledger to `out`. A failed fetch writes
/// nothing and becomes the process error, so the exit code is non-zero.
async fn print_ledger(repository: &dyn RecordRepository, out: &mut impl Write) -> Result<()> {
    let records = repository
        .fetch_all()
        .await
        .map_err(|error| eyre!("Could not load records: {error}"))?;
    write_ledger(&LedgerView::build(&records, &Local), out)?;
    Ok(())
}

fn write_ledger(view: &LedgerView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Balance {}", view.balance_text())?;
    for entry in &view.entries {
        writeln!(
            out,
            "{} {:>12}  {:<11}  {}  {}",
            entry.icon, entry.amount_text, entry.date_text, entry.category, entry.description
        )?;
    }
    out.flush()
}

async fn run_tui(
    config: AppConfig,
    config_store: ConfigStore,
    repository: Arc<dyn RecordRepository>,
    theme_override: Option<Theme>,
) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(AppOptions {
        config,
        config_store,
        repository,
        theme_override,
        particle_seed: particle_seed(),
    });

    let result = app.run(&mut terminal).await;
    tui::restore()?;
    tracing::info!("pocketbook exited");
    result
}

// ============================================================================
// Tests
// ============================================================================
