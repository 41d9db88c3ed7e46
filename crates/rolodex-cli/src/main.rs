mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_store::{paths, JsonFileStore, Storage};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Interactive address book with birthday reminders")]
struct Cli {
    /// Address book file
    #[arg(long)]
    data_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
    /// Pin the date used by `birthdays`
    #[arg(long, hide = true, value_name = "DD.MM.YYYY")]
    today: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        verbose,
        today,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = today.as_deref().map(util::parse_today).transpose()?;
    let book_path = paths::resolve_book_path(data_path.or_else(|| app_config.data_path.clone()))
        .with_context(|| "resolve address book path")?;
    debug!(path = %book_path.display(), "address book path resolved");

    let store = JsonFileStore::open(&book_path)
        .with_context(|| format!("open address book {}", book_path.display()))?;
    let book = store
        .load()
        .with_context(|| format!("load address book {}", book_path.display()))?;

    let mut ctx = Context {
        book,
        store: &store,
        config: &app_config,
        today,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(&mut ctx, stdin.lock(), &mut stdout).with_context(|| "terminal i/o")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
